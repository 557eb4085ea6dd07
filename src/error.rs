//! Error types for the PDFGate client

use thiserror::Error;

/// Result type alias for PDFGate client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the PDFGate client
#[derive(Error, Debug)]
pub enum Error {
    /// Request parameters were missing or inconsistent; detected before dispatch
    #[error("Invalid parameters: {reason}")]
    Validation { reason: String },

    /// Network or connection level failure while talking to the API
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("API error: status {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {reason}")]
    Decoding { reason: String },

    /// The blocking runtime could not be created
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Error::Validation {
            reason: reason.into(),
        }
    }

    pub(crate) fn decoding(reason: impl std::fmt::Display) -> Self {
        Error::Decoding {
            reason: reason.to_string(),
        }
    }

    /// HTTP status code for [`Error::Api`], `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request never reached a well-formed API response
    /// (connection failures, timeouts).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_set_for_api_errors() {
        let err = Error::Api {
            status: 422,
            message: "Unprocessable".to_string(),
        };
        assert_eq!(err.status(), Some(422));

        assert_eq!(Error::validation("missing html").status(), None);
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let err = Error::Api {
            status: 400,
            message: "Required field 'file' is missing".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("Required field 'file' is missing"));
    }
}
