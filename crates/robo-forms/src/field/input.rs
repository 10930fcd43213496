//! Input and Textarea fields
//!
//! Scalar `<input>` types, `<input type=file>` and `<textarea>`.

use super::{ControlBase, FieldValue, FormControl};
use crate::error::{FormError, FormResult};
use crate::tag::TagRef;

/// HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Url,
    Tel,
    Search,
    Color,
    Date,
    Time,
    Datetime,
    DatetimeLocal,
    Month,
    Week,
    Number,
    Range,
    Hidden,
    File,
    Checkbox,
    Radio,
    Submit,
    Image,
    Button,
    Reset,
}

impl InputType {
    /// Parse a `type` attribute; missing or empty means `text`
    pub fn parse(s: Option<&str>) -> FormResult<Self> {
        let Some(raw) = s.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::Text);
        };
        Ok(match raw.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "password" => Self::Password,
            "email" => Self::Email,
            "url" => Self::Url,
            "tel" => Self::Tel,
            "search" => Self::Search,
            "color" => Self::Color,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::Datetime,
            "datetime-local" => Self::DatetimeLocal,
            "month" => Self::Month,
            "week" => Self::Week,
            "number" => Self::Number,
            "range" => Self::Range,
            "hidden" => Self::Hidden,
            "file" => Self::File,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "submit" => Self::Submit,
            "image" => Self::Image,
            "button" => Self::Button,
            "reset" => Self::Reset,
            _ => return Err(FormError::UnrecognizedFieldType(raw.to_string())),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Color => "color",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::DatetimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Number => "number",
            Self::Range => "range",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Submit => "submit",
            Self::Image => "image",
            Self::Button => "button",
            Self::Reset => "reset",
        }
    }

    /// Check if this is a button type
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Submit | Self::Image | Self::Button | Self::Reset)
    }

    /// Check if this type is grouped by name
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

/// Scalar `<input>` (text, password, hidden, number, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    base: ControlBase,
    input_type: InputType,
    value: String,
}

impl InputField {
    pub(crate) fn from_tag(tag: &TagRef<'_>, input_type: InputType) -> Self {
        let hidden = input_type == InputType::Hidden;
        Self {
            base: ControlBase::from_tag(tag, !hidden),
            input_type,
            value: tag.attr("value").unwrap_or_default().to_string(),
        }
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }
}

impl FormControl for InputField {
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
        self.value = single_value(self.name(), value)?;
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.base.disabled
    }

    fn is_hidden(&self) -> bool {
        self.input_type == InputType::Hidden
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.name()
            .map(|name| vec![(name.to_string(), self.value.clone())])
            .unwrap_or_default()
    }

    fn tag_type(&self) -> String {
        format!("<input type=\"{}\"", self.input_type.as_str())
    }
}

/// `<input type=file>`; the value is a local path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileField {
    base: ControlBase,
    multiple: bool,
    paths: Vec<String>,
}

impl FileField {
    pub(crate) fn from_tag(tag: &TagRef<'_>) -> Self {
        Self {
            base: ControlBase::from_tag(tag, true),
            multiple: tag.has_attr("multiple"),
            paths: Vec::new(),
        }
    }

    /// Paths currently attached
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }
}

impl FormControl for FileField {
    fn name(&self) -> Option<&str> {
        self.base.name()
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> FieldValue {
        match self.paths.as_slice() {
            [] => FieldValue::Empty,
            [path] if !self.multiple => FieldValue::Single(path.clone()),
            paths => FieldValue::Multiple(paths.to_vec()),
        }
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        self.paths = match value {
            FieldValue::Empty => Vec::new(),
            FieldValue::Single(path) => vec![path],
            FieldValue::Multiple(paths) if self.multiple => paths,
            FieldValue::Multiple(_) => {
                return Err(FormError::invalid(self.name(), "file input does not accept multiple files"));
            }
        };
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.base.disabled
    }

    /// One pair per path; an empty pair when nothing is attached
    fn entries(&self) -> Vec<(String, String)> {
        let Some(name) = self.name() else {
            return Vec::new();
        };
        if self.paths.is_empty() {
            return vec![(name.to_string(), String::new())];
        }
        self.paths
            .iter()
            .map(|path| (name.to_string(), path.clone()))
            .collect()
    }

    fn tag_type(&self) -> String {
        "<input type=\"file\"".to_string()
    }
}

/// `<textarea>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextareaField {
    base: ControlBase,
    value: String,
}

impl TextareaField {
    pub(crate) fn from_tag(tag: &TagRef<'_>) -> Self {
        Self {
            base: ControlBase::from_tag(tag, true),
            value: tag.text(),
        }
    }
}

impl FormControl for TextareaField {
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
        self.value = single_value(self.name(), value)?;
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.base.disabled
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.name()
            .map(|name| vec![(name.to_string(), self.value.clone())])
            .unwrap_or_default()
    }

    fn tag_type(&self) -> String {
        "<textarea".to_string()
    }
}

/// Scalar value for a text-like control; `Empty` clears it
fn single_value(name: Option<&str>, value: FieldValue) -> FormResult<String> {
    match value {
        FieldValue::Empty => Ok(String::new()),
        FieldValue::Single(s) => Ok(s),
        FieldValue::Multiple(_) => Err(FormError::invalid(name, "field takes a single value")),
    }
}
