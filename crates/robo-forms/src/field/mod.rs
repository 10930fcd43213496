//! Form Fields
//!
//! One [`Field`] per logical form control. Scalar inputs, textareas,
//! selects, radio/checkbox groups and submit buttons each have their own
//! type implementing [`FormControl`]; [`Field`] is the closed set of them
//! that a [`Form`](crate::Form) stores.
//!
//! Fields own their values. Nothing is written back into the document they
//! were built from.

mod button;
mod choice;
mod input;
mod select;

pub use button::{ButtonKind, SubmitControl};
pub use choice::{CheckboxGroup, ChoiceOption, RadioGroup};
pub use input::{FileField, InputField, InputType, TextareaField};
pub use select::{MultiSelectField, SelectField, SelectOption};

use std::fmt;

use crate::error::FormResult;
use crate::label::resolve_label;
use crate::tag::TagRef;

/// Value read from or written to a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Nothing selected / no value
    #[default]
    Empty,
    /// One value
    Single(String),
    /// Several values, in document order
    Multiple(Vec<String>),
}

impl FieldValue {
    /// The value if it is a single string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            _ => None,
        }
    }

    /// All values as a list (empty for `Empty`)
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(s) => vec![s.clone()],
            Self::Multiple(values) => values.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::from)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(values: &[&str]) -> Self {
        Self::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldValue {
    fn from(values: [&str; N]) -> Self {
        Self::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "None"),
            Self::Single(s) => write!(f, "{:?}", s),
            Self::Multiple(values) => write!(f, "{:?}", values),
        }
    }
}

/// Where a field's pairs go in a [`Payload`](crate::Payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadChannel {
    /// Ordinary key/value pairs (query string or body)
    Data,
    /// File uploads, encoded as multipart by the transport
    Files,
}

/// Trait for form control elements
pub trait FormControl {
    /// The `name` attribute; unnamed controls are never submitted
    fn name(&self) -> Option<&str>;

    /// Label resolved from the markup (empty if none)
    fn label(&self) -> &str;

    /// Current value
    fn value(&self) -> FieldValue;

    /// Replace the current value
    fn set_value(&mut self, value: FieldValue) -> FormResult<()>;

    /// Check if the control is disabled
    fn is_disabled(&self) -> bool;

    fn is_hidden(&self) -> bool {
        false
    }

    /// Whether the control contributes to a submission at all
    fn include_in_request(&self) -> bool {
        self.name().is_some() && !self.is_disabled()
    }

    /// Whether activating the control submits the form
    fn is_submit_option(&self) -> bool {
        false
    }

    /// Pairs the control would submit, ignoring [`include_in_request`](Self::include_in_request)
    fn entries(&self) -> Vec<(String, String)>;

    /// Pairs the control submits
    fn serialize(&self) -> Vec<(String, String)> {
        if self.include_in_request() {
            self.entries()
        } else {
            Vec::new()
        }
    }

    /// Short markup-like description, e.g. `<input type="text"`
    fn tag_type(&self) -> String;
}

/// State shared by every single-tag control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBase {
    pub(crate) name: Option<String>,
    pub(crate) label: String,
    pub(crate) disabled: bool,
}

impl ControlBase {
    /// Read name, label and disabled state from a tag
    pub(crate) fn from_tag(tag: &TagRef<'_>, with_label: bool) -> Self {
        let label = if with_label {
            resolve_label(tag.doc(), tag.node())
        } else {
            String::new()
        };
        Self {
            name: control_name(tag),
            label,
            disabled: is_disabled(tag),
        }
    }

    pub(crate) fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Non-empty `name` attribute
pub(crate) fn control_name(tag: &TagRef<'_>) -> Option<String> {
    tag.attr("name").filter(|n| !n.is_empty()).map(str::to_string)
}

/// `disabled` on the tag, or an enclosing `<fieldset disabled>` (controls
/// inside that fieldset's first `<legend>` stay enabled)
pub(crate) fn is_disabled(tag: &TagRef<'_>) -> bool {
    if tag.has_attr("disabled") {
        return true;
    }

    let tree = tag.doc().tree();
    let mut below = tag.node();
    for (id, node) in tree.ancestors(tag.node()) {
        let disabled_fieldset = node
            .as_element()
            .is_some_and(|e| e.is("fieldset") && e.has_attr("disabled"));
        if disabled_fieldset {
            let first_legend = tree
                .children(id)
                .find(|(_, child)| child.as_element().is_some_and(|e| e.is("legend")))
                .map(|(legend, _)| legend);
            if first_legend != Some(below) {
                return true;
            }
        }
        below = id;
    }
    false
}

/// A form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Text-like `<input>` (text, password, hidden, email, ...)
    Input(InputField),
    /// `<input type=file>`
    File(FileField),
    /// `<textarea>`
    Textarea(TextareaField),
    /// `<select>` without `multiple`
    Select(SelectField),
    /// `<select multiple>`
    MultiSelect(MultiSelectField),
    /// Same-named `<input type=radio>` tags
    Radio(RadioGroup),
    /// Same-named `<input type=checkbox>` tags
    Checkbox(CheckboxGroup),
    /// `<button>` and button-like `<input>`s
    Submit(SubmitControl),
}

impl Field {
    fn control(&self) -> &dyn FormControl {
        match self {
            Self::Input(f) => f,
            Self::File(f) => f,
            Self::Textarea(f) => f,
            Self::Select(f) => f,
            Self::MultiSelect(f) => f,
            Self::Radio(f) => f,
            Self::Checkbox(f) => f,
            Self::Submit(f) => f,
        }
    }

    fn control_mut(&mut self) -> &mut dyn FormControl {
        match self {
            Self::Input(f) => f,
            Self::File(f) => f,
            Self::Textarea(f) => f,
            Self::Select(f) => f,
            Self::MultiSelect(f) => f,
            Self::Radio(f) => f,
            Self::Checkbox(f) => f,
            Self::Submit(f) => f,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.control().name()
    }

    pub fn label(&self) -> &str {
        self.control().label()
    }

    pub fn value(&self) -> FieldValue {
        self.control().value()
    }

    pub fn set_value(&mut self, value: impl Into<FieldValue>) -> FormResult<()> {
        self.control_mut().set_value(value.into())
    }

    pub fn is_disabled(&self) -> bool {
        self.control().is_disabled()
    }

    pub fn is_hidden(&self) -> bool {
        self.control().is_hidden()
    }

    pub fn include_in_request(&self) -> bool {
        self.control().include_in_request()
    }

    pub fn is_submit_option(&self) -> bool {
        self.control().is_submit_option()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.control().entries()
    }

    pub fn serialize(&self) -> Vec<(String, String)> {
        self.control().serialize()
    }

    pub fn tag_type(&self) -> String {
        self.control().tag_type()
    }

    /// Payload side-channel this field's pairs belong to
    pub fn channel(&self) -> PayloadChannel {
        match self {
            Self::File(_) => PayloadChannel::Files,
            _ => PayloadChannel::Data,
        }
    }

    pub fn as_radio(&self) -> Option<&RadioGroup> {
        match self {
            Self::Radio(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_radio_mut(&mut self) -> Option<&mut RadioGroup> {
        match self {
            Self::Radio(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&CheckboxGroup> {
        match self {
            Self::Checkbox(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_checkbox_mut(&mut self) -> Option<&mut CheckboxGroup> {
        match self {
            Self::Checkbox(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&SelectField> {
        match self {
            Self::Select(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_multi_select(&self) -> Option<&MultiSelectField> {
        match self {
            Self::MultiSelect(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_submit(&self) -> Option<&SubmitControl> {
        match self {
            Self::Submit(s) => Some(s),
            _ => None,
        }
    }
}
