use std::time::Duration;

use thiserror::Error;

/// Errors produced by the outbound HTTP transport.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HttpError {
    /// Request building failed
    #[error("Failed to build request: {0}")]
    RequestBuild(#[from] http::Error),

    /// Invalid header value (user agent)
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Request attempt timed out
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Transport error (network, connection, etc)
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// TLS error
    #[error("TLS error: {0}")]
    Tls(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response body exceeded size limit
    #[error("Response body too large: limit {limit} bytes, got {actual} bytes")]
    BodyTooLarge { limit: usize, actual: usize },

    /// Any status other than 200 OK
    #[error("HTTP {status}: {body_preview}")]
    HttpStatus {
        status: http::StatusCode,
        body_preview: String,
    },

    /// URL could not be turned into a request target
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUri { url: String, reason: String },

    /// URL scheme rejected by the transport security mode
    #[error("URL scheme '{scheme}' not allowed: {reason}")]
    InvalidScheme { scheme: String, reason: String },

    /// Buffer worker is gone
    #[error("Service unavailable: internal failure")]
    ServiceClosed,
}

impl HttpError {
    /// Returns `true` if no response was received from the remote side.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_) | Self::Tls(_))
    }
}

impl From<hyper::Error> for HttpError {
    fn from(err: hyper::Error) -> Self {
        HttpError::Transport(Box::new(err))
    }
}

impl From<hyper_util::client::legacy::Error> for HttpError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        HttpError::Transport(Box::new(err))
    }
}
