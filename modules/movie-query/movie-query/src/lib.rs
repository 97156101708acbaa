//! Movie Query Module Implementation
//!
//! Talks to an OMDb-compatible JSON API over HTTPS. The public API is defined
//! in `movie-query-sdk` and re-exported here.
//!
//! ```ignore
//! use movie_query::{MovieQueryClient, MovieQueryConfig, OmdbClient};
//!
//! let client = OmdbClient::from_config(&config)?;
//! let record = client.find("tt0076759").await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use movie_query_sdk::{
    LookupQuery, MediaType, MovieQueryClient, MovieQueryError, MovieRecord, MovieSummary,
    PlotLength, Rating, SearchQuery, SearchResultSet,
};

pub mod config;
pub mod local_client;

pub use config::{ApiKey, MovieQueryConfig};
pub use local_client::OmdbClient;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
