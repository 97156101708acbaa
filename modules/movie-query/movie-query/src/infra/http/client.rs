use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use tower::{Service, ServiceExt};
use tower::buffer::Buffer;
use url::Url;

use super::config::TransportSecurity;
use super::error::HttpError;
use super::response::{HttpResponse, ResponseBody};

pub type ServiceFuture =
    Pin<Box<dyn Future<Output = Result<Response<ResponseBody>, HttpError>> + Send>>;

pub type BufferedService = Buffer<Request<Full<Bytes>>, ServiceFuture>;

/// Outbound JSON-over-HTTPS client.
///
/// `Clone + Send + Sync`; clones share the connection pool through the
/// buffer worker.
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) service: BufferedService,
    pub(crate) max_body_size: usize,
    pub(crate) transport_security: TransportSecurity,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("max_body_size", &self.max_body_size)
            .field("transport_security", &self.transport_security)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Issue a GET with `Accept: application/json`.
    ///
    /// Every HTTP status comes back as `Ok`; use
    /// [`HttpResponse::checked_bytes`] to reject non-200 answers.
    ///
    /// # Errors
    /// Returns `HttpError::InvalidScheme` / `HttpError::InvalidUri` when the
    /// URL is not usable under the configured transport security.
    /// Returns `HttpError::Timeout` or `HttpError::Transport` when no
    /// response arrives.
    pub async fn get(&self, url: &Url) -> Result<HttpResponse, HttpError> {
        let uri = self.validate_url(url)?;
        let request = Request::get(uri)
            .header(http::header::ACCEPT, "application/json")
            .body(Full::new(Bytes::new()))?;

        let mut service = self.service.clone();
        let ready = service.ready().await.map_err(map_buffer_error)?;
        let inner = ready.call(request).await.map_err(map_buffer_error)?;

        Ok(HttpResponse {
            inner,
            max_body_size: self.max_body_size,
        })
    }

    fn validate_url(&self, url: &Url) -> Result<http::Uri, HttpError> {
        match url.scheme() {
            "https" => {}
            "http" if self.transport_security == TransportSecurity::AllowInsecureHttp => {}
            "http" => {
                return Err(HttpError::InvalidScheme {
                    scheme: "http".to_owned(),
                    reason: "HTTPS required".to_owned(),
                });
            }
            other => {
                return Err(HttpError::InvalidScheme {
                    scheme: other.to_owned(),
                    reason: "only http:// and https:// schemes are supported".to_owned(),
                });
            }
        }

        if url.host_str().is_none() {
            return Err(HttpError::InvalidUri {
                url: url.to_string(),
                reason: "missing host".to_owned(),
            });
        }

        url.as_str()
            .parse::<http::Uri>()
            .map_err(|e| HttpError::InvalidUri {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Unwrap the inner `HttpError`, or report a dead buffer worker.
fn map_buffer_error(err: tower::BoxError) -> HttpError {
    match err.downcast::<HttpError>() {
        Ok(http_err) => *http_err,
        Err(err) => {
            tracing::error!(error = %err, "buffer worker closed unexpectedly");
            HttpError::ServiceClosed
        }
    }
}
