//! Form errors

use thiserror::Error;

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised while building, filling or serializing a form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no <form> element found")]
    FormNotFound,

    #[error("found {count} <form> elements, expected exactly one")]
    AmbiguousForm { count: usize },

    #[error("unrecognized input type \"{0}\"")]
    UnrecognizedFieldType(String),

    #[error("invalid value for field {field:?}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("form has {count} submit controls; the active one must be given")]
    AmbiguousSubmit { count: usize },

    #[error("control is not a submit control of this form")]
    InvalidSubmit,

    #[error("no field named {0:?}")]
    NotFound(String),
}

impl FormError {
    pub(crate) fn invalid(field: Option<&str>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.unwrap_or_default().to_string(),
            reason: reason.into(),
        }
    }
}
