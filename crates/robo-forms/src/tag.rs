//! Field tags
//!
//! [`TagRef`] is the borrowed view fields are built from; [`TagSnapshot`]
//! is the owned copy a [`Form`](crate::Form) keeps so tag-based lookups
//! keep working after the document is dropped.

use robo_dom::{Document, ElementData, NodeId};

/// Tag names that can become form fields
pub const FIELD_TAGS: &[&str] = &["input", "button", "select", "textarea"];

/// Borrowed element view used during field construction
#[derive(Debug, Clone, Copy)]
pub struct TagRef<'a> {
    doc: &'a Document,
    node: NodeId,
    elem: &'a ElementData,
}

impl<'a> TagRef<'a> {
    /// View `node` if it is an element
    pub fn new(doc: &'a Document, node: NodeId) -> Option<Self> {
        let elem = doc.element(node)?;
        Some(Self { doc, node, elem })
    }

    pub fn doc(&self) -> &'a Document {
        self.doc
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Lowercase tag name
    pub fn name(&self) -> &'a str {
        &self.elem.name
    }

    pub fn is(&self, tag: &str) -> bool {
        self.elem.is(tag)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.elem.attr(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.elem.has_attr(name)
    }

    /// Raw text content
    pub fn text(&self) -> String {
        self.doc.text_content(self.node)
    }

    /// Whether this tag is one of [`FIELD_TAGS`]
    pub fn is_field_tag(&self) -> bool {
        FIELD_TAGS.iter().any(|t| self.is(t))
    }

    /// Owned copy of name and attributes
    pub fn snapshot(&self) -> TagSnapshot {
        TagSnapshot {
            node: self.node,
            name: self.elem.name.clone(),
            attrs: self
                .elem
                .attrs()
                .map(|a| (a.name.clone(), a.value.clone()))
                .collect(),
        }
    }
}

/// Owned copy of a field tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSnapshot {
    node: NodeId,
    name: String,
    attrs: Vec<(String, String)>,
}

impl TagSnapshot {
    /// Node the tag came from
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Lowercase tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// Collapse runs of whitespace and trim, as browsers do for option text
pub(crate) fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  My \n  Saab\t"), "My Saab");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_snapshot_keeps_attributes() {
        let mut doc = Document::default();
        let tree = doc.tree_mut();
        let input = tree.create_element("input");
        tree.element_mut(input).unwrap().set_attr("name", "q");
        tree.append_child(tree.root(), input);

        let snapshot = TagRef::new(&doc, input).unwrap().snapshot();
        drop(doc);

        assert_eq!(snapshot.name(), "input");
        assert_eq!(snapshot.attr("NAME"), Some("q"));
        assert!(!snapshot.has_attr("type"));
    }
}
