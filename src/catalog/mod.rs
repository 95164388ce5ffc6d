//! Show catalog access and record normalization.
//!
//! This module provides the `Show` and `Episode` records used throughout the
//! crate, the `CatalogClient` trait for fetching raw records from a remote
//! catalog, and the normalizer that turns those raw records into typed ones.
mod normalize;
mod tvmaze;
mod tvmaze_types;

pub use normalize::{NormalizeError, to_episode, to_episodes, to_show, to_shows};
pub use tvmaze::TvMazeClient;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Base URL of the public TVMaze API.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Image used for shows that have no artwork of their own.
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur while talking to the show catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog failed at the transport level
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The catalog answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to parse the catalog's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A single show as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Catalog identifier of the show
    pub id: u64,
    /// The show title
    pub name: String,
    /// Summary as delivered by the catalog, may contain HTML markup
    pub summary: String,
    /// Artwork URL, never empty
    pub image: String,
}

/// Season or episode number, which the catalog may deliver as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ordinal {
    Number(i64),
    Text(String),
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinal::Number(n) => write!(f, "{n}"),
            Ordinal::Text(s) => f.write_str(s),
        }
    }
}

/// A single episode of one show.
///
/// Apart from `id`, fields are projected as the catalog delivered them and
/// stay `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Catalog identifier of the episode
    pub id: u64,
    /// The episode title
    pub name: Option<String>,
    /// The season this episode belongs to
    pub season: Option<Ordinal>,
    /// The episode number within its season
    pub number: Option<Ordinal>,
}

/// Trait for remote catalogs that can be searched for shows and episodes.
///
/// Implementors return the raw JSON records unchanged; shaping them into
/// `Show` and `Episode` is left to the normalizer.
pub trait CatalogClient: Send + Sync {
    /// Searches the catalog for shows matching `term`.
    ///
    /// The term is passed through without validation, an empty term included.
    ///
    /// # Returns
    ///
    /// The raw search result records in the order the catalog returned them
    fn search_shows(&self, term: &str) -> Result<Vec<serde_json::Value>, CatalogError>;

    /// Fetches all raw episode records of the show with the given identifier.
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<serde_json::Value>, CatalogError>;
}
