//! Client error types.

use thiserror::Error;

use crate::api::Mode;
use crate::response::Body;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or malformed. Raised before any
    /// request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A builder terminal was called that its mode does not allow.
    #[error("Cannot {action} with a {mode} builder")]
    InvalidMode {
        /// The terminal that was called.
        action: &'static str,
        /// The mode the builder was created in.
        mode: Mode,
    },

    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a status outside 200/201/204.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, decoded as JSON when possible.
        body: Body,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Status code of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if a conditional write was rejected because the stored ref
    /// did not match.
    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, Error::Api { status: 412, .. })
    }

    /// Check if a create-only write hit an existing item.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Api { status: 409, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    pub(crate) fn missing(what: &str) -> Self {
        Error::InvalidArgument(format!("{} is required", what))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
