//! Public models for the `movie-query` module.
//!
//! Response models mirror the JSON schema of the movie service and keep its
//! field names on the wire, so a record can be deserialised, compared, and
//! serialised back without loss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MovieQueryError;
use crate::wire;

/// Highest result page the service will serve for a search.
pub const MAX_SEARCH_PAGE: u16 = 100;

/// Kind of title to restrict a search to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    Episode,
}

impl MediaType {
    /// Value sent in the `type` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Episode => "episode",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = MovieQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            "episode" => Ok(Self::Episode),
            other => Err(MovieQueryError::invalid_query(format!(
                "unknown media type '{other}' (expected movie, series or episode)"
            ))),
        }
    }
}

/// Length of the plot text returned by a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotLength {
    #[default]
    Short,
    Full,
}

impl PlotLength {
    /// Value sent in the `plot` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for PlotLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotLength {
    type Err = MovieQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "full" => Ok(Self::Full),
            other => Err(MovieQueryError::invalid_query(format!(
                "unknown plot length '{other}' (expected short or full)"
            ))),
        }
    }
}

/// Free-text title search.
///
/// # Example
///
/// ```
/// use movie_query_sdk::{MediaType, SearchQuery};
///
/// let query = SearchQuery::new("Star Wars")
///     .with_media_type(MediaType::Movie)
///     .with_year(1977);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Title text; matching is performed by the service.
    pub title: String,
    /// Restrict results to one kind of title.
    pub media_type: Option<MediaType>,
    /// Restrict results to one release year.
    pub year: Option<u16>,
    /// Result page, `1..=MAX_SEARCH_PAGE`.
    pub page: Option<u16>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u16) -> Self {
        self.page = Some(page);
        self
    }

    /// Check the query before it is sent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if the title is blank or the page is outside
    /// `1..=MAX_SEARCH_PAGE`.
    pub fn validate(&self) -> Result<(), MovieQueryError> {
        if self.title.trim().is_empty() {
            return Err(MovieQueryError::invalid_query("title must not be empty"));
        }
        if let Some(page) = self.page
            && !(1..=MAX_SEARCH_PAGE).contains(&page)
        {
            return Err(MovieQueryError::invalid_query(format!(
                "page {page} is out of range 1..={MAX_SEARCH_PAGE}"
            )));
        }
        Ok(())
    }
}

/// Lookup of a single record by unique identifier (e.g. `tt0076759`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupQuery {
    pub id: String,
    pub plot: Option<PlotLength>,
}

impl LookupQuery {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plot: None,
        }
    }

    #[must_use]
    pub fn with_plot(mut self, plot: PlotLength) -> Self {
        self.plot = Some(plot);
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidQuery` if the identifier is blank.
    pub fn validate(&self) -> Result<(), MovieQueryError> {
        if self.id.trim().is_empty() {
            return Err(MovieQueryError::invalid_query("identifier must not be empty"));
        }
        Ok(())
    }
}

/// One entry of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Ordered search results plus the service's total count and status flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSet {
    #[serde(rename = "Search", default)]
    pub results: Vec<MovieSummary>,
    #[serde(rename = "totalResults", with = "wire::count", default)]
    pub total_results: u64,
    #[serde(rename = "Response", with = "wire::flag", default = "wire::default_true")]
    pub response: bool,
}

impl Default for SearchResultSet {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
            response: true,
        }
    }
}

impl SearchResultSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A third-party score attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Detailed attributes of a single title.
///
/// Only `Title` and `imdbID` are required; every other attribute is passed
/// through verbatim when present and omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub released: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub writer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub actors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub awards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ratings: Vec<Rating>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating", skip_serializing_if = "Option::is_none", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", skip_serializing_if = "Option::is_none", default)]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
    #[serde(rename = "DVD", skip_serializing_if = "Option::is_none", default)]
    pub dvd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub box_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub production: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    #[serde(with = "wire::flag", default = "wire::default_true")]
    pub response: bool,
}

impl MovieRecord {
    /// Minimal record with only the required attributes set.
    #[must_use]
    pub fn new(imdb_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            rated: None,
            released: None,
            runtime: None,
            genre: None,
            director: None,
            writer: None,
            actors: None,
            plot: None,
            language: None,
            country: None,
            awards: None,
            poster: None,
            ratings: Vec::new(),
            metascore: None,
            imdb_rating: None,
            imdb_votes: None,
            imdb_id: imdb_id.into(),
            kind: None,
            dvd: None,
            box_office: None,
            production: None,
            website: None,
            response: true,
        }
    }

    /// `imdbRating` as a number; `None` when absent or `"N/A"`.
    #[must_use]
    pub fn imdb_rating_value(&self) -> Option<f64> {
        known(self.imdb_rating.as_deref())?.parse().ok()
    }

    /// `Metascore` as a number; `None` when absent or `"N/A"`.
    #[must_use]
    pub fn metascore_value(&self) -> Option<u32> {
        known(self.metascore.as_deref())?.parse().ok()
    }

    /// `imdbVotes` as a number (thousands separators removed).
    #[must_use]
    pub fn imdb_votes_value(&self) -> Option<u64> {
        known(self.imdb_votes.as_deref())?
            .replace(',', "")
            .parse()
            .ok()
    }
}

fn known(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty() && *v != "N/A")
}
