//! Radio and checkbox groups
//!
//! Same-named radio (or checkbox) inputs are one field. The group owns an
//! option per tag; options are never top-level fields of their own.

use robo_dom::NodeId;

use super::{FieldValue, FormControl, control_name, is_disabled};
use crate::error::{FormError, FormResult};
use crate::label::resolve_label;
use crate::tag::TagRef;

/// One `<input type=radio|checkbox>` inside a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub node: NodeId,
    /// `value` attribute, `"on"` when absent
    pub value: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

impl ChoiceOption {
    fn from_tag(tag: &TagRef<'_>) -> Self {
        Self {
            node: tag.node(),
            value: tag.attr("value").unwrap_or("on").to_string(),
            label: resolve_label(tag.doc(), tag.node()),
            checked: tag.has_attr("checked"),
            disabled: is_disabled(tag),
        }
    }
}

fn options_from_tags(tags: &[TagRef<'_>]) -> Vec<ChoiceOption> {
    tags.iter().map(ChoiceOption::from_tag).collect()
}

fn unknown_option(name: Option<&str>, value: &str) -> FormError {
    FormError::invalid(name, format!("{value:?} is not one of the options"))
}

/// Checked, enabled options as pairs
fn checked_entries(name: Option<&str>, options: &[ChoiceOption]) -> Vec<(String, String)> {
    let Some(name) = name else {
        return Vec::new();
    };
    options
        .iter()
        .filter(|o| o.checked && !o.disabled)
        .map(|o| (name.to_string(), o.value.clone()))
        .collect()
}

/// Radio buttons sharing a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    name: Option<String>,
    options: Vec<ChoiceOption>,
}

impl RadioGroup {
    pub(crate) fn from_tags(tags: &[TagRef<'_>]) -> Self {
        let mut options = options_from_tags(tags);
        // First checked wins
        let mut seen = false;
        for option in &mut options {
            if option.checked && seen {
                option.checked = false;
            }
            seen |= option.checked;
        }
        Self {
            name: tags.first().and_then(control_name),
            options,
        }
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn value_options(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn checked(&self) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.checked)
    }

    /// Check the option with `value` and uncheck its siblings
    pub fn select(&mut self, value: &str) -> FormResult<()> {
        let Some(index) = self.options.iter().position(|o| o.value == value) else {
            return Err(unknown_option(self.name(), value));
        };
        for (i, option) in self.options.iter_mut().enumerate() {
            option.checked = i == index;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.options.iter_mut().for_each(|o| o.checked = false);
    }
}

impl FormControl for RadioGroup {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> &str {
        ""
    }

    fn value(&self) -> FieldValue {
        self.checked()
            .map_or(FieldValue::Empty, |o| FieldValue::Single(o.value.clone()))
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        match value {
            FieldValue::Empty => {
                self.clear();
                Ok(())
            }
            FieldValue::Single(v) => self.select(&v),
            FieldValue::Multiple(_) => Err(FormError::invalid(
                self.name(),
                "radio group takes a single value",
            )),
        }
    }

    /// A group is disabled only when every option is
    fn is_disabled(&self) -> bool {
        self.options.iter().all(|o| o.disabled)
    }

    fn include_in_request(&self) -> bool {
        self.name().is_some() && self.options.iter().any(|o| o.checked && !o.disabled)
    }

    fn entries(&self) -> Vec<(String, String)> {
        checked_entries(self.name(), &self.options)
    }

    fn tag_type(&self) -> String {
        "<input type=\"radio\"".to_string()
    }
}

/// Checkboxes sharing a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxGroup {
    name: Option<String>,
    options: Vec<ChoiceOption>,
}

impl CheckboxGroup {
    pub(crate) fn from_tags(tags: &[TagRef<'_>]) -> Self {
        Self {
            name: tags.first().and_then(control_name),
            options: options_from_tags(tags),
        }
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn value_options(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    /// Checked values in document order
    pub fn checked_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Toggle every option carrying `value`
    pub fn set_checked(&mut self, value: &str, checked: bool) -> FormResult<()> {
        let mut found = false;
        for option in self.options.iter_mut().filter(|o| o.value == value) {
            option.checked = checked;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(unknown_option(self.name(), value))
        }
    }
}

impl FormControl for CheckboxGroup {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> &str {
        ""
    }

    fn value(&self) -> FieldValue {
        FieldValue::Multiple(self.checked_values().into_iter().map(str::to_string).collect())
    }

    /// Check exactly the given values
    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        let values = value.to_vec();
        if let Some(missing) = values
            .iter()
            .find(|v| !self.options.iter().any(|o| &o.value == *v))
        {
            return Err(unknown_option(self.name(), missing));
        }
        for option in &mut self.options {
            option.checked = values.contains(&option.value);
        }
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.options.iter().all(|o| o.disabled)
    }

    fn include_in_request(&self) -> bool {
        self.name().is_some() && self.options.iter().any(|o| o.checked && !o.disabled)
    }

    fn entries(&self) -> Vec<(String, String)> {
        checked_entries(self.name(), &self.options)
    }

    fn tag_type(&self) -> String {
        "<input type=\"checkbox\"".to_string()
    }
}
