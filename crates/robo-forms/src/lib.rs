//! robo Forms
//!
//! HTML form model for the robo browser: typed fields built from parsed
//! markup, value editing, and serialization into request payloads.
//!
//! ```ignore
//! let doc = robo_html::parse(html);
//! let mut form = Form::from_document(&doc)?;
//! form.set_field_value("q", "rust")?;
//! let submission = form.submission(None)?;
//! ```

mod display;
mod error;
mod factory;
mod field;
mod form;
mod label;
mod payload;
mod tag;

pub use error::{FormError, FormResult};
pub use factory::{BuiltField, build_fields};
pub use field::{
    ButtonKind, CheckboxGroup, ChoiceOption, Field, FieldValue, FileField, FormControl,
    InputField, InputType, MultiSelectField, PayloadChannel, RadioGroup, SelectField,
    SelectOption, SubmitControl, TextareaField,
};
pub use form::{FieldId, Form, FormEnctype, FormMethod, Submission};
pub use label::resolve_label;
pub use payload::{Payload, RequestArguments, serialize};
pub use tag::{FIELD_TAGS, TagRef, TagSnapshot};
