//! `MovieQueryClient` trait definition.
//!
//! This trait defines the public API for the `movie-query` module.

use async_trait::async_trait;

use crate::error::MovieQueryError;
use crate::models::{LookupQuery, MovieRecord, SearchQuery, SearchResultSet};

/// Public API trait for the `movie-query` module.
///
/// Every call is independent: implementations hold no per-call state, so a
/// single client may serve any number of concurrent calls. Implementations
/// do not retry, cache, or log failures; errors are returned to the caller
/// unchanged.
#[async_trait]
pub trait MovieQueryClient: Send + Sync {
    /// Search for all titles matching a query.
    ///
    /// Results keep the order and field values returned by the service.
    ///
    /// # Errors
    ///
    /// * `InvalidQuery` - If the title is blank or the page is out of range
    /// * `TransportFailure` - If the request could not be completed
    /// * `RemoteError` - If the service answered with a non-200 status or a
    ///   negative `Response` flag (e.g. `"Movie not found!"`)
    /// * `MalformedResponse` - If the payload does not match the schema
    async fn search_with(&self, query: &SearchQuery) -> Result<SearchResultSet, MovieQueryError>;

    /// Look up a single record by its unique identifier.
    ///
    /// # Errors
    ///
    /// * `InvalidQuery` - If the identifier is blank
    /// * `TransportFailure` - If the request could not be completed
    /// * `RemoteError` - If the service answered with a non-200 status (the
    ///   message is the raw response text) or a negative `Response` flag
    /// * `MalformedResponse` - If the payload does not match the schema
    async fn find_with(&self, query: &LookupQuery) -> Result<MovieRecord, MovieQueryError>;

    /// Search by title text with default options.
    ///
    /// # Errors
    ///
    /// Same as [`MovieQueryClient::search_with`].
    async fn search(&self, title: &str) -> Result<SearchResultSet, MovieQueryError> {
        self.search_with(&SearchQuery::new(title)).await
    }

    /// Look up by identifier with default options.
    ///
    /// # Errors
    ///
    /// Same as [`MovieQueryClient::find_with`].
    async fn find(&self, id: &str) -> Result<MovieRecord, MovieQueryError> {
        self.find_with(&LookupQuery::new(id)).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the queries it receives and answers with canned values.
    #[derive(Default)]
    struct RecordingClient {
        searches: Mutex<Vec<SearchQuery>>,
        lookups: Mutex<Vec<LookupQuery>>,
    }

    #[async_trait]
    impl MovieQueryClient for RecordingClient {
        async fn search_with(
            &self,
            query: &SearchQuery,
        ) -> Result<SearchResultSet, MovieQueryError> {
            self.searches.lock().unwrap().push(query.clone());
            Ok(SearchResultSet::default())
        }

        async fn find_with(&self, query: &LookupQuery) -> Result<MovieRecord, MovieQueryError> {
            self.lookups.lock().unwrap().push(query.clone());
            Err(MovieQueryError::remote(Some(500), "Server is broken"))
        }
    }

    #[tokio::test]
    async fn test_search_default_builds_plain_query() {
        let client = RecordingClient::default();
        let result = client.search("Star Wars").await.unwrap();
        assert!(result.results.is_empty());

        let searches = client.searches.lock().unwrap();
        assert_eq!(searches.as_slice(), &[SearchQuery::new("Star Wars")]);
    }

    #[tokio::test]
    async fn test_find_default_builds_plain_query() {
        let client = RecordingClient::default();
        let err = client.find("tt0076759").await.unwrap_err();
        assert_eq!(err.to_string(), "Server is broken");

        let lookups = client.lookups.lock().unwrap();
        assert_eq!(lookups.as_slice(), &[LookupQuery::new("tt0076759")]);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let client: Box<dyn MovieQueryClient> = Box::new(RecordingClient::default());
        assert!(client.search("Alien").await.is_ok());
    }
}
