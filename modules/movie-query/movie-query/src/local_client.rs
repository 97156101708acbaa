//! Client implementing the `MovieQueryClient` trait.

use std::sync::Arc;

use async_trait::async_trait;
use movie_query_sdk::{
    LookupQuery, MovieQueryClient, MovieQueryError, MovieRecord, SearchQuery, SearchResultSet,
};

use crate::config::MovieQueryConfig;
use crate::domain::{DomainError, MovieQueryService};
use crate::infra::OmdbCatalog;
use crate::infra::http::HttpClientBuilder;

/// Movie query client backed by the remote movie service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct OmdbClient {
    service: Arc<MovieQueryService>,
}

impl OmdbClient {
    #[must_use]
    pub fn new(service: Arc<MovieQueryService>) -> Self {
        Self { service }
    }

    /// Validate the configuration and build the client.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `MovieQueryError::Internal` if the configuration is invalid or
    /// the TLS transport cannot be initialised.
    pub fn from_config(config: &MovieQueryConfig) -> Result<Self, MovieQueryError> {
        Self::build(config).map_err(MovieQueryError::from)
    }

    fn build(config: &MovieQueryConfig) -> Result<Self, DomainError> {
        let base_url = config.validate()?;
        let http = HttpClientBuilder::with_config(config.to_http_config()).build()?;
        let catalog = OmdbCatalog::new(
            http,
            base_url,
            config.api_key.clone(),
            config.api_version.clone(),
        );
        tracing::debug!(
            host = config.base_url.as_str(),
            timeout_ms = config.request_timeout_ms,
            "movie query client ready"
        );
        Ok(Self::new(Arc::new(MovieQueryService::new(Arc::new(catalog)))))
    }
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl MovieQueryClient for OmdbClient {
    async fn search_with(&self, query: &SearchQuery) -> Result<SearchResultSet, MovieQueryError> {
        self.service.search(query).await.map_err(MovieQueryError::from)
    }

    async fn find_with(&self, query: &LookupQuery) -> Result<MovieRecord, MovieQueryError> {
        self.service.find(query).await.map_err(MovieQueryError::from)
    }
}
