//! Form element
//!
//! A [`Form`] is built once from a parsed `<form>` and owns its fields.
//! It keeps no reference to the document, so it stays usable after the
//! page that produced it is gone (values are whatever the caller last set).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use robo_dom::{Document, NodeId};

use crate::error::{FormError, FormResult};
use crate::factory::{BuiltField, build_fields};
use crate::field::{Field, FieldValue, SubmitControl};
use crate::payload::{self, Payload};
use crate::tag::{FIELD_TAGS, TagRef, TagSnapshot};

/// Form submission method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

impl FormMethod {
    /// Parse a `method` attribute; anything but "post" is GET
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "post" => Self::Post,
            _ => Self::Get,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Form encoding type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormEnctype {
    #[default]
    UrlEncoded,
    Multipart,
    TextPlain,
}

impl FormEnctype {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "multipart/form-data" => Self::Multipart,
            "text/plain" => Self::TextPlain,
            _ => Self::UrlEncoded,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::UrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
            Self::TextPlain => "text/plain",
        }
    }
}

/// Source of per-form identities
static NEXT_FORM: AtomicU64 = AtomicU64::new(0);

/// Handle to one field of one form
///
/// Only valid for the form (or clones of the form) that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    form: u64,
    index: usize,
}

/// Everything needed to send a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub method: FormMethod,
    /// Empty means the current page URL
    pub action: String,
    pub enctype: FormEnctype,
    pub payload: Payload,
}

/// Form element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    key: u64,
    node: NodeId,
    name: Option<String>,
    id: Option<String>,
    action: String,
    method: FormMethod,
    enctype: FormEnctype,
    fields: Vec<BuiltField>,
    by_name: HashMap<String, Vec<usize>>,
}

impl Form {
    /// Build from a `<form>` element
    pub fn from_element(doc: &Document, node: NodeId) -> FormResult<Self> {
        let elem = doc
            .element(node)
            .filter(|e| e.is("form"))
            .ok_or(FormError::FormNotFound)?;

        let name = elem.attr("name").filter(|s| !s.is_empty()).map(str::to_string);
        let id = elem.id().filter(|s| !s.is_empty()).map(str::to_string);

        let tags = field_tags(doc, node, id.as_deref(), name.as_deref());
        let fields = build_fields(&tags)?;

        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, built) in fields.iter().enumerate() {
            if let Some(field_name) = built.field.name() {
                by_name.entry(field_name.to_string()).or_default().push(index);
            }
        }

        let form = Self {
            key: NEXT_FORM.fetch_add(1, Ordering::Relaxed),
            node,
            name,
            id,
            action: elem.attr("action").unwrap_or_default().to_string(),
            method: elem.attr("method").map(FormMethod::parse).unwrap_or_default(),
            enctype: elem.attr("enctype").map(FormEnctype::parse).unwrap_or_default(),
            fields,
            by_name,
        };

        tracing::debug!(
            "Built form with {} fields: {} {:?}",
            form.fields.len(),
            form.method.as_str(),
            form.action
        );
        Ok(form)
    }

    /// Build from the single `<form>` at or under `container`
    pub fn from_container(doc: &Document, container: NodeId) -> FormResult<Self> {
        if doc.element(container).is_some_and(|e| e.is("form")) {
            return Self::from_element(doc, container);
        }
        match doc.find_all(container, |_, e| e.is("form")).as_slice() {
            [] => Err(FormError::FormNotFound),
            [node] => Self::from_element(doc, *node),
            many => Err(FormError::AmbiguousForm { count: many.len() }),
        }
    }

    /// Build from the only form in the document
    pub fn from_document(doc: &Document) -> FormResult<Self> {
        Self::from_container(doc, doc.tree().root())
    }

    /// Build every form in the document, in document order
    pub fn all_from_document(doc: &Document) -> FormResult<Vec<Self>> {
        doc.elements_by_tag_name(&["form"])
            .into_iter()
            .map(|node| Self::from_element(doc, node))
            .collect()
    }

    /// Node of the `<form>` element
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// `action` attribute; empty means the current page
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> FormMethod {
        self.method
    }

    pub fn enctype(&self) -> FormEnctype {
        self.enctype
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in document order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().map(|b| &b.field)
    }

    /// Fields with their handles, in document order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, b)| (self.field_id_at(index), &b.field))
    }

    /// Distinct field names in document order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for name in self.fields().filter_map(Field::name) {
            if !keys.contains(&name) {
                keys.push(name);
            }
        }
        keys
    }

    fn field_id_at(&self, index: usize) -> FieldId {
        FieldId { form: self.key, index }
    }

    /// Handle of the first field named `name`
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        let index = *self.by_name.get(name)?.first()?;
        Some(self.field_id_at(index))
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        if id.form != self.key {
            return None;
        }
        self.fields.get(id.index).map(|b| &b.field)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        if id.form != self.key {
            return None;
        }
        self.fields.get_mut(id.index).map(|b| &mut b.field)
    }

    /// First field named `name`
    pub fn get_field(&self, name: &str) -> FormResult<&Field> {
        let id = self
            .field_id(name)
            .ok_or_else(|| FormError::NotFound(name.to_string()))?;
        self.field(id).ok_or_else(|| FormError::NotFound(name.to_string()))
    }

    pub fn get_field_mut(&mut self, name: &str) -> FormResult<&mut Field> {
        let id = self
            .field_id(name)
            .ok_or_else(|| FormError::NotFound(name.to_string()))?;
        self.field_mut(id).ok_or_else(|| FormError::NotFound(name.to_string()))
    }

    /// Every field named `name`, in document order
    pub fn get_fields(&self, name: &str) -> Vec<&Field> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&i| &self.fields[i].field).collect())
            .unwrap_or_default()
    }

    /// Set the value of the first field named `name`
    pub fn set_field_value(&mut self, name: &str, value: impl Into<FieldValue>) -> FormResult<()> {
        self.get_field_mut(name)?.set_value(value)
    }

    /// Field built from the tag at `node` (a grouped option yields its group)
    pub fn field_for_tag(&self, node: NodeId) -> Option<&Field> {
        self.find_field(|tag| tag.node() == node)
    }

    /// First field with a tag matching `predicate`
    pub fn find_field<F>(&self, mut predicate: F) -> Option<&Field>
    where
        F: FnMut(&TagSnapshot) -> bool,
    {
        self.fields
            .iter()
            .find(|b| b.tags.iter().any(&mut predicate))
            .map(|b| &b.field)
    }

    /// Tags a field was built from
    pub fn tags(&self, id: FieldId) -> &[TagSnapshot] {
        if id.form != self.key {
            return &[];
        }
        self.fields
            .get(id.index)
            .map(|b| b.tags.as_slice())
            .unwrap_or_default()
    }

    /// Handles of every submit-capable control
    pub fn submit_controls(&self) -> Vec<FieldId> {
        self.iter()
            .filter(|(_, f)| f.is_submit_option())
            .map(|(id, _)| id)
            .collect()
    }

    /// Resolve which submit control is used
    ///
    /// With no `submit` given, a lone submit control is chosen implicitly;
    /// several of them is [`FormError::AmbiguousSubmit`].
    pub fn active_submit(&self, submit: Option<FieldId>) -> FormResult<Option<FieldId>> {
        let controls = self.submit_controls();
        match submit {
            Some(id) if controls.contains(&id) => Ok(Some(id)),
            Some(_) => Err(FormError::InvalidSubmit),
            None => match controls.as_slice() {
                [] => Ok(None),
                [only] => Ok(Some(*only)),
                many => Err(FormError::AmbiguousSubmit { count: many.len() }),
            },
        }
    }

    /// Method after the active control's `formmethod`
    pub fn resolve_method(&self, active: Option<FieldId>) -> FormMethod {
        self.submit_override(active, |s| s.method()).unwrap_or(self.method)
    }

    /// Action after the active control's `formaction`
    pub fn resolve_action(&self, active: Option<FieldId>) -> &str {
        self.submit_override(active, |s| s.action()).unwrap_or(self.action.as_str())
    }

    /// Enctype after the active control's `formenctype`
    pub fn resolve_enctype(&self, active: Option<FieldId>) -> FormEnctype {
        self.submit_override(active, |s| s.enctype()).unwrap_or(self.enctype)
    }

    fn submit_override<'a, T>(
        &'a self,
        active: Option<FieldId>,
        get: impl FnOnce(&'a SubmitControl) -> Option<T>,
    ) -> Option<T> {
        self.field(active?)?.as_submit().and_then(get)
    }

    /// Serialize the current field values
    pub fn serialize(&self, submit: Option<FieldId>) -> FormResult<Payload> {
        payload::serialize(self, submit)
    }

    /// Method, action, enctype and payload for one submission
    pub fn submission(&self, submit: Option<FieldId>) -> FormResult<Submission> {
        let active = self.active_submit(submit)?;
        Ok(Submission {
            method: self.resolve_method(active),
            action: self.resolve_action(active).to_string(),
            enctype: self.resolve_enctype(active),
            payload: payload::serialize(self, active)?,
        })
    }
}

/// Field tags owned by the form at `form`, in document order
///
/// Tags inside the form belong to it unless their `form` attribute names
/// another form; tags anywhere whose `form` attribute matches this form's
/// id or name are added.
fn field_tags<'a>(
    doc: &'a Document,
    form: NodeId,
    id: Option<&str>,
    name: Option<&str>,
) -> Vec<TagRef<'a>> {
    let tree = doc.tree();
    doc.find_all(tree.root(), |node, elem| {
        if !FIELD_TAGS.iter().any(|t| elem.is(t)) {
            return false;
        }
        match elem.attr("form") {
            Some(owner) => Some(owner) == id || Some(owner) == name,
            None => tree.is_ancestor(form, node),
        }
    })
    .into_iter()
    .filter_map(|node| TagRef::new(doc, node))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_method_parse() {
        assert_eq!(FormMethod::parse("POST"), FormMethod::Post);
        assert_eq!(FormMethod::parse(" post "), FormMethod::Post);
        assert_eq!(FormMethod::parse("get"), FormMethod::Get);
        assert_eq!(FormMethod::parse("dialog"), FormMethod::Get);
        assert_eq!(FormMethod::Post.as_str(), "POST");
    }

    #[test]
    fn test_form_enctype() {
        assert_eq!(FormEnctype::parse("Multipart/Form-Data"), FormEnctype::Multipart);
        assert_eq!(FormEnctype::parse("bogus"), FormEnctype::UrlEncoded);
        assert_eq!(FormEnctype::TextPlain.content_type(), "text/plain");
    }

    #[test]
    fn test_not_a_form() {
        let doc = Document::default();
        assert_eq!(
            Form::from_element(&doc, doc.tree().root()),
            Err(FormError::FormNotFound)
        );
    }
}
