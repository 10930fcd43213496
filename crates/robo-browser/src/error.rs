//! Browser errors

use robo_forms::FormError;
use robo_net::NetError;
use thiserror::Error;

/// Result type for browser operations
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Errors raised by the robotic browser
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no page loaded")]
    NoState,

    #[error("history index out of range")]
    IndexOutOfRange,

    #[error("not tracking history")]
    NotTrackingHistory,

    #[error("no matching link found")]
    LinkNotFound,

    #[error("link element has no href attribute")]
    MissingHref,

    #[error("invalid URL {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Net(#[from] NetError),
}
