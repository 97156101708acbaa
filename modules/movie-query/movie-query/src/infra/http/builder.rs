use std::time::Duration;

use bytes::Bytes;
use http::header::USER_AGENT;
use http::{HeaderValue, Response};
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::Client;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use tower::buffer::Buffer;
use tower::timeout::TimeoutLayer;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::decompression::DecompressionLayer;
use tower_http::set_header::SetRequestHeaderLayer;

use super::client::{BufferedService, HttpClient};
use super::config::{HttpClientConfig, TransportSecurity};
use super::error::HttpError;
use super::response::ResponseBody;
use super::tls::build_https_connector;

/// Builder for [`HttpClient`].
///
/// Requests are sent once: no retries and no redirect following.
#[derive(Debug, Clone, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Accept plain `http://` URLs. Only for local mock servers.
    ///
    /// Available in debug builds or with the `allow-insecure-http` feature.
    #[must_use]
    #[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
    pub fn allow_insecure_http(mut self) -> Self {
        self.config.transport = TransportSecurity::AllowInsecureHttp;
        self
    }

    /// Build the client. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns `HttpError::Tls` if the connector cannot be set up.
    /// Returns `HttpError::InvalidHeaderValue` for a malformed user agent.
    pub fn build(self) -> Result<HttpClient, HttpError> {
        if self.config.transport == TransportSecurity::AllowInsecureHttp {
            tracing::warn!("insecure HTTP enabled; use only against local mock servers");
        }

        let timeout = self.config.request_timeout;
        let https = build_https_connector(self.config.tls_roots, self.config.transport)?;

        let mut client_builder = Client::builder(TokioExecutor::new());
        // pool_idle_timeout needs a timer to take effect
        client_builder
            .pool_timer(TokioTimer::new())
            .pool_max_idle_per_host(self.config.pool_max_idle_per_host)
            .http2_only(false);
        if let Some(idle_timeout) = self.config.pool_idle_timeout {
            client_builder.pool_idle_timeout(idle_timeout);
        }
        let hyper_client = client_builder.build::<_, Full<Bytes>>(https);

        let user_agent = HeaderValue::from_str(&self.config.user_agent)?;

        // Outer to inner: Buffer -> Timeout -> UserAgent -> Decompression -> hyper
        let service = ServiceBuilder::new()
            .layer(TimeoutLayer::new(timeout))
            .layer(SetRequestHeaderLayer::if_not_present(USER_AGENT, user_agent))
            .layer(DecompressionLayer::new())
            .service(hyper_client)
            .map_response(map_decompression_response)
            .map_err(move |e: tower::BoxError| map_tower_error(e, timeout))
            .boxed_clone();

        let buffered: BufferedService = Buffer::new(service, self.config.buffer_capacity.max(1));

        Ok(HttpClient {
            service: buffered,
            max_body_size: self.config.max_body_size,
            transport_security: self.config.transport,
        })
    }
}

fn map_tower_error(err: tower::BoxError, timeout: Duration) -> HttpError {
    if err.is::<tower::timeout::error::Elapsed>() {
        return HttpError::Timeout(timeout);
    }
    match err.downcast::<HttpError>() {
        Ok(http_err) => *http_err,
        Err(other) => HttpError::Transport(other),
    }
}

fn map_decompression_response<B>(response: Response<B>) -> Response<ResponseBody>
where
    B: hyper::body::Body<Data = Bytes> + Send + Sync + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let (parts, body) = response.into_parts();
    let boxed: ResponseBody = body.map_err(Into::into).boxed();
    Response::from_parts(parts, boxed)
}
