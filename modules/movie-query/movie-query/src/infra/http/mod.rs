//! Outbound HTTP transport: hyper + rustls behind a small tower stack.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity};
pub use error::HttpError;
pub use response::HttpResponse;
