//! Error types for the Classroom client.

use serde::Deserialize;

/// Result type for Classroom operations.
pub type ClassroomResult<T> = Result<T, ClassroomError>;

/// Errors that can occur when talking to the Classroom API.
#[derive(Debug, thiserror::Error)]
pub enum ClassroomError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClassroomError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create an API error from a status code and response body.
    ///
    /// Google wraps errors as `{"error": {"code", "message", "status"}}`;
    /// anything else is carried verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<GoogleErrorEnvelope>(body) {
            Self::Api {
                status,
                message: envelope.error.message,
                details: envelope.error.status,
            }
        } else {
            Self::Api {
                status,
                message: body.to_string(),
                details: None,
            }
        }
    }
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    #[allow(dead_code)]
    code: Option<u16>,
    message: String,
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_google_envelope() {
        let body = r#"{"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}}"#;

        match ClassroomError::from_response(404, body) {
            ClassroomError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Requested entity was not found.");
                assert_eq!(details.as_deref(), Some("NOT_FOUND"));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_response_falls_back_to_raw_body() {
        let err = ClassroomError::from_response(502, "Bad Gateway");

        match err {
            ClassroomError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
                assert!(details.is_none());
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
