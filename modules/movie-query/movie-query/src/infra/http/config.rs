use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default User-Agent string for outbound requests
pub const DEFAULT_USER_AGENT: &str = concat!("movie-query/", env!("CARGO_PKG_VERSION"));

/// Maximum body preview kept in status errors (8KB).
pub const ERROR_BODY_PREVIEW_LIMIT: usize = 8 * 1024;

/// Which URL schemes the transport accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportSecurity {
    /// Only `https://` URLs.
    #[default]
    TlsOnly,
    /// `http://` is accepted as well (mock servers in tests).
    AllowInsecureHttp,
}

/// Source of trusted root certificates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsRootConfig {
    /// Mozilla roots bundled with `webpki-roots`.
    #[default]
    WebPki,
    /// Roots from the operating system store.
    Native,
}

/// Transport-level settings.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Per-request timeout up to the arrival of response headers.
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Upper bound on (decompressed) response bytes.
    pub max_body_size: usize,
    pub transport: TransportSecurity,
    pub tls_roots: TlsRootConfig,
    /// `None` keeps idle connections indefinitely.
    pub pool_idle_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
    /// Capacity of the request buffer in front of the service stack.
    pub buffer_capacity: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_body_size: 2 * 1024 * 1024,
            transport: TransportSecurity::TlsOnly,
            tls_roots: TlsRootConfig::WebPki,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: 32,
            buffer_capacity: 256,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.transport, TransportSecurity::TlsOnly);
        assert_eq!(config.tls_roots, TlsRootConfig::WebPki);
        assert!(config.user_agent.starts_with("movie-query/"));
    }
}
