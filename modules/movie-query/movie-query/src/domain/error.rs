//! Domain error types for the movie query module.

use movie_query_sdk::MovieQueryError;
use thiserror::Error;

use crate::infra::http::HttpError;

/// Fallback message when the service rejects a request without saying why.
const REJECTED_WITHOUT_MESSAGE: &str = "request rejected";

#[derive(Error, Debug)]
pub enum DomainError {
    /// The caller's query failed validation.
    #[error(transparent)]
    Query(#[from] MovieQueryError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a failure. `message` is its own text.
    #[error("{message}")]
    Remote { status: Option<u16>, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// A `Response: "False"` payload delivered with HTTP 200.
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REJECTED_WITHOUT_MESSAGE.to_owned());
        Self::Remote {
            status: Some(200),
            message,
        }
    }
}

impl From<HttpError> for DomainError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::HttpStatus {
                status,
                body_preview,
            } => {
                let text = body_preview.trim();
                let message = if text.is_empty() {
                    status
                        .canonical_reason()
                        .map_or_else(|| status.as_u16().to_string(), ToOwned::to_owned)
                } else {
                    text.to_owned()
                };
                Self::Remote {
                    status: Some(status.as_u16()),
                    message,
                }
            }
            e @ (HttpError::Timeout(_) | HttpError::Transport(_) | HttpError::Tls(_)) => {
                Self::Transport(e.to_string())
            }
            e @ HttpError::BodyTooLarge { .. } => Self::Malformed(e.to_string()),
            e => Self::Internal(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<DomainError> for MovieQueryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Query(e) => e,
            DomainError::InvalidConfig(msg) => {
                MovieQueryError::internal(format!("invalid configuration: {msg}"))
            }
            DomainError::Transport(msg) => MovieQueryError::transport(msg),
            DomainError::Remote { status, message } => MovieQueryError::remote(status, message),
            DomainError::Malformed(msg) => MovieQueryError::malformed(msg),
            DomainError::Internal(msg) => MovieQueryError::internal(msg),
        }
    }
}
