use async_trait::async_trait;
use movie_query_sdk::{LookupQuery, MovieRecord, SearchQuery, SearchResultSet};

use super::error::DomainError;

/// Backend that answers movie queries.
///
/// Queries handed to a catalog have already been validated.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResultSet, DomainError>;

    async fn lookup(&self, query: &LookupQuery) -> Result<MovieRecord, DomainError>;
}
