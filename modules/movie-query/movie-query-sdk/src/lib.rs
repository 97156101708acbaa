//! Movie Query SDK
//!
//! This crate provides the public API for the `movie-query` module:
//! - `MovieQueryClient` trait for searching and looking up movies
//! - `SearchQuery` / `LookupQuery` request models
//! - `SearchResultSet`, `MovieSummary`, `MovieRecord` response models
//! - `MovieQueryError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use movie_query_sdk::{MovieQueryClient, MovieQueryError};
//!
//! let results = client.search("Star Wars").await?;
//! for movie in &results.results {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//!
//! match client.find("tt0076759").await {
//!     Ok(record) => println!("{}", record.title),
//!     Err(MovieQueryError::RemoteError { message, .. }) => eprintln!("{message}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;
mod wire;

// Re-export main types at crate root for convenience
pub use api::MovieQueryClient;
pub use error::MovieQueryError;
pub use models::{
    LookupQuery, MAX_SEARCH_PAGE, MediaType, MovieRecord, MovieSummary, PlotLength, Rating,
    SearchQuery, SearchResultSet,
};
