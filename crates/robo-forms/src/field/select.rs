//! Select fields
//!
//! `<select>` and `<select multiple>` with their `<option>` lists.

use robo_dom::NodeId;

use super::{ControlBase, FieldValue, FormControl};
use crate::error::{FormError, FormResult};
use crate::tag::{TagRef, normalize_text};

/// Option element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub node: NodeId,
    /// `value` attribute, else the normalized option text
    pub value: String,
    pub text: String,
    pub selected: bool,
    /// Disabled directly or through its `<optgroup>`
    pub disabled: bool,
}

/// Collect the options of a select tag in document order
fn collect_options(tag: &TagRef<'_>) -> Vec<SelectOption> {
    let doc = tag.doc();
    doc.find_all(tag.node(), |_, e| e.is("option"))
        .into_iter()
        .filter_map(|node| {
            let elem = doc.element(node)?;
            let text = normalize_text(&doc.text_content(node));
            let in_disabled_group = doc.tree().ancestors(node).any(|(_, n)| {
                n.as_element()
                    .is_some_and(|e| e.is("optgroup") && e.has_attr("disabled"))
            });
            Some(SelectOption {
                node,
                value: elem.attr("value").map_or_else(|| text.clone(), str::to_string),
                text,
                selected: elem.has_attr("selected"),
                disabled: elem.has_attr("disabled") || in_disabled_group,
            })
        })
        .collect()
}

/// Single-choice `<select>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    base: ControlBase,
    options: Vec<SelectOption>,
}

impl SelectField {
    pub(crate) fn from_tag(tag: &TagRef<'_>) -> Self {
        let mut options = collect_options(tag);
        // First `selected` wins
        let mut seen = false;
        for option in &mut options {
            if option.selected && seen {
                option.selected = false;
            }
            seen |= option.selected;
        }
        Self {
            base: ControlBase::from_tag(tag, true),
            options,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Values of every option
    pub fn value_options(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.selected)
    }

    /// Select the option with `value`, deselecting the rest
    pub fn select(&mut self, value: &str) -> FormResult<()> {
        let Some(index) = self.options.iter().position(|o| o.value == value) else {
            return Err(FormError::invalid(
                self.name(),
                format!("{value:?} is not one of the options"),
            ));
        };
        for (i, option) in self.options.iter_mut().enumerate() {
            option.selected = i == index;
        }
        Ok(())
    }
}

impl FormControl for SelectField {
    fn name(&self) -> Option<&str> {
        self.base.name()
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> FieldValue {
        self.selected()
            .map_or(FieldValue::Empty, |o| FieldValue::Single(o.value.clone()))
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        match value {
            FieldValue::Empty => {
                self.options.iter_mut().for_each(|o| o.selected = false);
                Ok(())
            }
            FieldValue::Single(v) => self.select(&v),
            FieldValue::Multiple(_) => {
                Err(FormError::invalid(self.name(), "select takes a single value"))
            }
        }
    }

    fn is_disabled(&self) -> bool {
        self.base.disabled
    }

    fn include_in_request(&self) -> bool {
        self.name().is_some() && !self.is_disabled() && self.selected().is_some()
    }

    fn entries(&self) -> Vec<(String, String)> {
        match (self.name(), self.selected()) {
            (Some(name), Some(option)) if !option.disabled => {
                vec![(name.to_string(), option.value.clone())]
            }
            _ => Vec::new(),
        }
    }

    fn tag_type(&self) -> String {
        "<select".to_string()
    }
}

/// `<select multiple>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectField {
    base: ControlBase,
    options: Vec<SelectOption>,
}

impl MultiSelectField {
    pub(crate) fn from_tag(tag: &TagRef<'_>) -> Self {
        Self {
            base: ControlBase::from_tag(tag, true),
            options: collect_options(tag),
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value_options(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    /// Selected values in document order
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Select exactly the options whose value is in `values`
    fn select_all(&mut self, values: &[String]) -> FormResult<()> {
        if let Some(missing) = values
            .iter()
            .find(|v| !self.options.iter().any(|o| &o.value == *v))
        {
            return Err(FormError::invalid(
                self.name(),
                format!("{missing:?} is not one of the options"),
            ));
        }
        for option in &mut self.options {
            option.selected = values.contains(&option.value);
        }
        Ok(())
    }
}

impl FormControl for MultiSelectField {
    fn name(&self) -> Option<&str> {
        self.base.name()
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    /// Always a list, even with one selection
    fn value(&self) -> FieldValue {
        FieldValue::Multiple(self.selected_values().into_iter().map(str::to_string).collect())
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        self.select_all(&value.to_vec())
    }

    fn is_disabled(&self) -> bool {
        self.base.disabled
    }

    fn include_in_request(&self) -> bool {
        self.name().is_some() && !self.is_disabled() && self.options.iter().any(|o| o.selected)
    }

    fn entries(&self) -> Vec<(String, String)> {
        let Some(name) = self.name() else {
            return Vec::new();
        };
        self.options
            .iter()
            .filter(|o| o.selected && !o.disabled)
            .map(|o| (name.to_string(), o.value.clone()))
            .collect()
    }

    fn tag_type(&self) -> String {
        "<select multiple".to_string()
    }
}
