//! Error types for the `movie-query` module.

use thiserror::Error;

/// Errors that can occur when using the movie query API.
///
/// `RemoteError` displays as the raw message sent by the service so callers
/// can surface it verbatim (e.g. `"Server is broken"`, `"Movie not found!"`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MovieQueryError {
    /// The query was rejected before any request was issued.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The request could not be completed (DNS, connect, TLS, transport timeout).
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// The service answered, but with a failure.
    #[error("{message}")]
    RemoteError {
        /// HTTP status of the response, when one was received.
        status: Option<u16>,
        /// Raw failure text from the service.
        message: String,
    },

    /// The service answered 200 but the payload did not match the schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// An internal error occurred (client construction, invariant breach).
    #[error("internal error: {0}")]
    Internal(String),
}

impl MovieQueryError {
    /// Creates an `InvalidQuery` error.
    #[must_use]
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Creates a `TransportFailure` error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure(message.into())
    }

    /// Creates a `RemoteError`.
    #[must_use]
    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RemoteError {
            status,
            message: message.into(),
        }
    }

    /// Creates a `MalformedResponse` error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status attached to a `RemoteError`.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteError { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns `true` for failures reported by the remote service itself.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteError { .. })
    }

    /// Returns `true` if the request never produced a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }
}
