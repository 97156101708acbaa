//! Domain service for movie search and lookup.

use std::sync::Arc;

use movie_query_sdk::{LookupQuery, MovieRecord, SearchQuery, SearchResultSet};
use tracing::instrument;

use super::catalog::MovieCatalog;
use super::error::DomainError;

/// Validates queries and forwards them to the catalog.
///
/// Failures are returned, never logged above `debug`.
pub struct MovieQueryService {
    catalog: Arc<dyn MovieCatalog>,
}

impl MovieQueryService {
    #[must_use]
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// Search by title. Results keep the order the catalog returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Query` for an invalid query, otherwise whatever
    /// the catalog reports.
    #[instrument(skip_all, fields(title = %query.title, page = ?query.page))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResultSet, DomainError> {
        query.validate()?;
        let result = self.catalog.search(query).await;
        match &result {
            Ok(set) => tracing::debug!(
                returned = set.len(),
                total = set.total_results,
                "search completed"
            ),
            Err(e) => tracing::debug!(error = %e, "search failed"),
        }
        result
    }

    /// Look up a single record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Query` for a blank identifier, otherwise
    /// whatever the catalog reports.
    #[instrument(skip_all, fields(id = %query.id))]
    pub async fn find(&self, query: &LookupQuery) -> Result<MovieRecord, DomainError> {
        query.validate()?;
        let result = self.catalog.lookup(query).await;
        match &result {
            Ok(record) => tracing::debug!(title = %record.title, "lookup completed"),
            Err(e) => tracing::debug!(error = %e, "lookup failed"),
        }
        result
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use movie_query_sdk::{MovieQueryError, MovieSummary};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeCatalog {
        calls: AtomicUsize,
    }

    fn summary(title: &str, id: &str) -> MovieSummary {
        MovieSummary {
            title: title.to_owned(),
            year: "1977".to_owned(),
            imdb_id: id.to_owned(),
            kind: "movie".to_owned(),
            poster: "N/A".to_owned(),
        }
    }

    #[async_trait]
    impl MovieCatalog for FakeCatalog {
        async fn search(&self, _query: &SearchQuery) -> Result<SearchResultSet, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(SearchResultSet {
                results: vec![summary("B", "tt2"), summary("A", "tt1")],
                total_results: 2,
                response: true,
            })
        }

        async fn lookup(&self, query: &LookupQuery) -> Result<MovieRecord, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if query.id == "tt404" {
                return Err(DomainError::rejected(Some("Incorrect IMDb ID.".to_owned())));
            }
            Ok(MovieRecord::new(query.id.clone(), "Found"))
        }
    }

    fn service() -> (MovieQueryService, Arc<FakeCatalog>) {
        let catalog = Arc::new(FakeCatalog::default());
        (MovieQueryService::new(catalog.clone()), catalog)
    }

    #[tokio::test]
    async fn test_search_keeps_catalog_order() {
        let (svc, _) = service();
        let set = svc.search(&SearchQuery::new("star")).await.unwrap();
        let ids: Vec<_> = set.results.iter().map(|s| s.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt2", "tt1"]);
    }

    #[tokio::test]
    async fn test_invalid_query_never_reaches_catalog() {
        let (svc, catalog) = service();
        let err = svc.search(&SearchQuery::new("   ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Query(MovieQueryError::InvalidQuery(_))));
        let err = svc.find(&LookupQuery::new("")).await.unwrap_err();
        assert!(matches!(err, DomainError::Query(_)));
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_find_propagates_remote_failure() {
        let (svc, _) = service();
        let err = svc.find(&LookupQuery::new("tt404")).await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect IMDb ID.");
    }

    #[tokio::test]
    async fn test_find_ok() {
        let (svc, _) = service();
        let record = svc.find(&LookupQuery::new("tt0076759")).await.unwrap();
        assert_eq!(record.imdb_id, "tt0076759");
    }
}
