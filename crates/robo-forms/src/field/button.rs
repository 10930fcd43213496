//! Button controls
//!
//! `<button>` plus `<input type=submit|image|reset|button>`. Only submit
//! buttons take part in submission, and only when they are the active one.

use super::{ControlBase, FieldValue, FormControl, InputType};
use crate::error::{FormError, FormResult};
use crate::form::{FormEnctype, FormMethod};
use crate::tag::TagRef;

/// What a button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Submit,
    Reset,
    Button,
}

impl ButtonKind {
    /// Parse a `<button type>`; missing or invalid means submit
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("reset") => Self::Reset,
            Some("button") => Self::Button,
            _ => Self::Submit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }
}

/// Submit-capable (or inert) button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    base: ControlBase,
    kind: ButtonKind,
    /// `Some` for `<input>` buttons, `None` for `<button>`
    input_type: Option<InputType>,
    value: String,
    method: Option<FormMethod>,
    action: Option<String>,
    enctype: Option<FormEnctype>,
}

impl SubmitControl {
    /// Build from `<input type=submit|image|reset|button>`
    pub(crate) fn from_input(tag: &TagRef<'_>, input_type: InputType) -> Self {
        let kind = match input_type {
            InputType::Reset => ButtonKind::Reset,
            InputType::Button => ButtonKind::Button,
            _ => ButtonKind::Submit,
        };
        Self::build(tag, kind, Some(input_type))
    }

    /// Build from `<button>`
    pub(crate) fn from_button(tag: &TagRef<'_>) -> Self {
        Self::build(tag, ButtonKind::parse(tag.attr("type")), None)
    }

    fn build(tag: &TagRef<'_>, kind: ButtonKind, input_type: Option<InputType>) -> Self {
        let submits = kind == ButtonKind::Submit;
        Self {
            base: ControlBase::from_tag(tag, true),
            kind,
            input_type,
            value: tag.attr("value").unwrap_or_default().to_string(),
            method: tag.attr("formmethod").filter(|_| submits).map(FormMethod::parse),
            action: tag.attr("formaction").filter(|_| submits).map(str::to_string),
            enctype: tag.attr("formenctype").filter(|_| submits).map(FormEnctype::parse),
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// `formmethod` override
    pub fn method(&self) -> Option<FormMethod> {
        self.method
    }

    /// `formaction` override
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// `formenctype` override
    pub fn enctype(&self) -> Option<FormEnctype> {
        self.enctype
    }
}

impl FormControl for SubmitControl {
    fn name(&self) -> Option<&str> {
        self.base.name()
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> FieldValue {
        FieldValue::Single(self.value.clone())
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        self.value = match value {
            FieldValue::Empty => String::new(),
            FieldValue::Single(v) => v,
            FieldValue::Multiple(_) => {
                return Err(FormError::invalid(self.name(), "button takes a single value"));
            }
        };
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.base.disabled
    }

    /// Buttons are only sent as the active submit control
    fn include_in_request(&self) -> bool {
        false
    }

    fn is_submit_option(&self) -> bool {
        self.kind == ButtonKind::Submit
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.name()
            .map(|name| vec![(name.to_string(), self.value.clone())])
            .unwrap_or_default()
    }

    fn tag_type(&self) -> String {
        match self.input_type {
            Some(ty) => format!("<input type=\"{}\"", ty.as_str()),
            None => format!("<button type=\"{}\"", self.kind.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_kind_defaults_to_submit() {
        assert_eq!(ButtonKind::parse(None), ButtonKind::Submit);
        assert_eq!(ButtonKind::parse(Some("")), ButtonKind::Submit);
        assert_eq!(ButtonKind::parse(Some("bogus")), ButtonKind::Submit);
        assert_eq!(ButtonKind::parse(Some("RESET")), ButtonKind::Reset);
        assert_eq!(ButtonKind::parse(Some("button")), ButtonKind::Button);
    }
}
