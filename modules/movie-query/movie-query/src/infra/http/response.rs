use bytes::Bytes;
use http::{Response, StatusCode};
use http_body_util::BodyExt;

use super::config::ERROR_BODY_PREVIEW_LIMIT;
use super::error::HttpError;

/// Type-erased response body (possibly decompressed).
pub type ResponseBody =
    http_body_util::combinators::BoxBody<Bytes, Box<dyn std::error::Error + Send + Sync>>;

/// HTTP response with size-limited body readers.
#[derive(Debug)]
pub struct HttpResponse {
    pub(crate) inner: Response<ResponseBody>,
    pub(crate) max_body_size: usize,
}

impl HttpResponse {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Read the body of a `200 OK` response.
    ///
    /// Any other status becomes `HttpError::HttpStatus` carrying the first
    /// 8KB of the response body as text. Longer bodies are cut, never
    /// replaced.
    ///
    /// # Errors
    /// Returns `HttpError::HttpStatus` if the status is not 200.
    /// Returns `HttpError::BodyTooLarge` if the body exceeds the limit.
    pub async fn checked_bytes(self) -> Result<Bytes, HttpError> {
        let status = self.inner.status();
        if status != StatusCode::OK {
            let preview_limit = self.max_body_size.min(ERROR_BODY_PREVIEW_LIMIT);
            let prefix = read_body_prefix(self.inner, preview_limit).await?;
            let body_preview = preview_text(&prefix);
            return Err(HttpError::HttpStatus {
                status,
                body_preview,
            });
        }

        read_body_limited(self.inner, self.max_body_size).await
    }
}

/// Collect the body, failing as soon as more than `limit` bytes arrive.
///
/// The limit applies to decompressed bytes.
async fn read_body_limited(
    response: Response<ResponseBody>,
    limit: usize,
) -> Result<Bytes, HttpError> {
    let mut body = std::pin::pin!(response.into_body());
    let mut collected = Vec::new();

    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(HttpError::Transport)?;
        if let Some(chunk) = frame.data_ref() {
            if collected.len() + chunk.len() > limit {
                return Err(HttpError::BodyTooLarge {
                    limit,
                    actual: collected.len() + chunk.len(),
                });
            }
            collected.extend_from_slice(chunk);
        }
    }

    Ok(Bytes::from(collected))
}

/// Collect at most `limit` bytes and drop the rest of the body.
async fn read_body_prefix(
    response: Response<ResponseBody>,
    limit: usize,
) -> Result<Vec<u8>, HttpError> {
    let mut body = std::pin::pin!(response.into_body());
    let mut collected = Vec::new();

    while collected.len() < limit {
        let Some(frame) = body.frame().await else {
            break;
        };
        let frame = frame.map_err(HttpError::Transport)?;
        if let Some(chunk) = frame.data_ref() {
            let take = chunk.len().min(limit - collected.len());
            collected.extend_from_slice(&chunk[..take]);
        }
    }

    Ok(collected)
}

/// Decode a body prefix, dropping a multi-byte character split by the cut.
fn preview_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(e) if e.error_len().is_none() => {
            String::from_utf8_lossy(&bytes[..e.valid_up_to()]).into_owned()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use http_body_util::Full;

    fn response(status: StatusCode, body: impl Into<Bytes>, max_body_size: usize) -> HttpResponse {
        let body: ResponseBody = Full::new(body.into())
            .map_err(|never| match never {})
            .boxed();
        let mut inner = Response::new(body);
        *inner.status_mut() = status;
        HttpResponse {
            inner,
            max_body_size,
        }
    }

    #[tokio::test]
    async fn test_checked_bytes_ok() {
        let bytes = response(StatusCode::OK, "{}", 1024)
            .checked_bytes()
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"{}");
    }

    #[tokio::test]
    async fn test_checked_bytes_non_ok_keeps_body_preview() {
        let err = response(StatusCode::INTERNAL_SERVER_ERROR, "Server is broken", 1024)
            .checked_bytes()
            .await
            .unwrap_err();
        match err {
            HttpError::HttpStatus {
                status,
                body_preview,
            } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body_preview, "Server is broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_rejected() {
        let err = response(StatusCode::NO_CONTENT, "", 1024)
            .checked_bytes()
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::HttpStatus { status, .. } if status == StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_body_limit() {
        let err = response(StatusCode::OK, "0123456789", 4)
            .checked_bytes()
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::BodyTooLarge { limit: 4, actual: 10 }));
    }

    #[tokio::test]
    async fn test_oversized_error_body_keeps_leading_text() {
        let err = response(StatusCode::BAD_GATEWAY, "0123456789", 4)
            .checked_bytes()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HttpError::HttpStatus { ref body_preview, .. } if body_preview == "0123"
        ));
    }

    #[tokio::test]
    async fn test_error_preview_is_capped_at_8kb() {
        let body = format!("Server is broken {}", "x".repeat(9000));
        let err = response(StatusCode::INTERNAL_SERVER_ERROR, body, 1024 * 1024)
            .checked_bytes()
            .await
            .unwrap_err();
        match err {
            HttpError::HttpStatus { body_preview, .. } => {
                assert_eq!(body_preview.len(), ERROR_BODY_PREVIEW_LIMIT);
                assert!(body_preview.starts_with("Server is broken x"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_preview_drops_split_character() {
        let bytes = "ab\u{e9}".as_bytes();
        assert_eq!(preview_text(&bytes[..3]), "ab");
        assert_eq!(preview_text(bytes), "ab\u{e9}");
    }
}
