//! OMDb-style JSON API over the HTTP transport.

use async_trait::async_trait;
use movie_query_sdk::{LookupQuery, MovieRecord, SearchQuery, SearchResultSet};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ApiKey;
use crate::domain::{DomainError, MovieCatalog};
use crate::infra::http::HttpClient;

/// Catalog backed by the remote movie service.
///
/// The request URL carries the API key and is never logged.
pub struct OmdbCatalog {
    http: HttpClient,
    base_url: Url,
    api_key: ApiKey,
    api_version: String,
}

impl OmdbCatalog {
    #[must_use]
    pub fn new(http: HttpClient, base_url: Url, api_key: ApiKey, api_version: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            api_version,
        }
    }

    fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("s", query.title.trim());
            if let Some(media_type) = query.media_type {
                pairs.append_pair("type", media_type.as_str());
            }
            if let Some(year) = query.year {
                pairs.append_pair("y", &year.to_string());
            }
            if let Some(page) = query.page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        self.with_credentials(url)
    }

    fn lookup_url(&self, query: &LookupQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("i", query.id.trim());
            if let Some(plot) = query.plot {
                pairs.append_pair("plot", plot.as_str());
            }
        }
        self.with_credentials(url)
    }

    fn with_credentials(&self, mut url: Url) -> Url {
        url.query_pairs_mut()
            .append_pair("v", &self.api_version)
            .append_pair("apikey", self.api_key.expose());
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T, DomainError> {
        let body = self.http.get(url).await?.checked_bytes().await?;
        tracing::trace!(bytes = body.len(), "response received");
        decode(&body)
    }
}

#[async_trait]
impl MovieCatalog for OmdbCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResultSet, DomainError> {
        self.fetch(&self.search_url(query)).await
    }

    async fn lookup(&self, query: &LookupQuery) -> Result<MovieRecord, DomainError> {
        self.fetch(&self.lookup_url(query)).await
    }
}

/// Decode a 200 body, turning `"Response": "False"` into a remote failure.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DomainError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(DomainError::Malformed("expected a JSON object".to_owned()));
    }
    if is_rejection(value.get("Response")) {
        let message = value.get("Error").and_then(Value::as_str).map(ToOwned::to_owned);
        return Err(DomainError::rejected(message));
    }
    Ok(serde_json::from_value(value)?)
}

fn is_rejection(flag: Option<&Value>) -> bool {
    match flag {
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("false"),
        _ => false,
    }
}
