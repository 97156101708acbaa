//! Configuration for the movie query module.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::error::DomainError;
use crate::infra::http::{DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity};

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Whether this build may talk plain HTTP at all.
pub const INSECURE_HTTP_AVAILABLE: bool = cfg!(any(debug_assertions, feature = "allow-insecure-http"));

/// API key for the movie service.
///
/// Formatting and serialisation print `[REDACTED]`; the buffer is zeroed on
/// drop.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key. Only for building the request URL.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

/// Accepts numbers and booleans too: layered config sources guess scalar
/// types, so a key like `12345`, `1e5` or `true` may arrive untyped.
impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ApiKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an API key string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ApiKey, E> {
                Ok(ApiKey::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ApiKey, E> {
                Ok(ApiKey(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ApiKey, E> {
                Ok(ApiKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ApiKey, E> {
                Ok(ApiKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ApiKey, E> {
                Ok(ApiKey(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ApiKey, E> {
                Ok(ApiKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Settings for [`crate::OmdbClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MovieQueryConfig {
    /// Service endpoint; query parameters are appended to it.
    pub base_url: String,
    pub api_key: ApiKey,
    /// Value of the `v` query parameter.
    pub api_version: String,
    pub request_timeout_ms: u64,
    pub max_response_size_bytes: usize,
    pub user_agent: String,
    pub tls_roots: TlsRootConfig,
    /// Accept `http://` base URLs. Rejected by validation unless the build
    /// allows insecure HTTP.
    pub allow_insecure_http: bool,
}

impl Default for MovieQueryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: ApiKey::default(),
            api_version: "1".to_owned(),
            request_timeout_ms: 10_000,
            max_response_size_bytes: 2 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            tls_roots: TlsRootConfig::WebPki,
            allow_insecure_http: false,
        }
    }
}

impl MovieQueryConfig {
    /// Check the settings and return the parsed endpoint.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfig` if the base URL does not parse,
    /// uses a scheme the build does not allow, or the API key is empty.
    pub fn validate(&self) -> Result<Url, DomainError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            DomainError::InvalidConfig(format!("base_url '{}' is not a valid URL: {e}", self.base_url))
        })?;

        match url.scheme() {
            "https" => {}
            "http" if self.allow_insecure_http && INSECURE_HTTP_AVAILABLE => {}
            "http" if self.allow_insecure_http => {
                return Err(DomainError::InvalidConfig(
                    "allow_insecure_http requires a debug build or the allow-insecure-http feature"
                        .to_owned(),
                ));
            }
            "http" => {
                return Err(DomainError::InvalidConfig(
                    "base_url must use https (set allow_insecure_http for local testing)".to_owned(),
                ));
            }
            other => {
                return Err(DomainError::InvalidConfig(format!(
                    "base_url scheme '{other}' is not supported"
                )));
            }
        }

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(DomainError::InvalidConfig(format!(
                "base_url '{}' has no host",
                self.base_url
            )));
        }
        if self.api_key.is_empty() {
            return Err(DomainError::InvalidConfig("api_key must not be empty".to_owned()));
        }
        if self.api_version.trim().is_empty() {
            return Err(DomainError::InvalidConfig("api_version must not be empty".to_owned()));
        }

        Ok(url)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Transport settings derived from this configuration.
    #[must_use]
    pub fn to_http_config(&self) -> HttpClientConfig {
        let transport = if self.allow_insecure_http && INSECURE_HTTP_AVAILABLE {
            TransportSecurity::AllowInsecureHttp
        } else {
            TransportSecurity::TlsOnly
        };
        HttpClientConfig {
            request_timeout: self.request_timeout(),
            user_agent: self.user_agent.clone(),
            max_body_size: self.max_response_size_bytes,
            transport,
            tls_roots: self.tls_roots,
            ..HttpClientConfig::default()
        }
    }
}
