/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON records returned by the TVMaze search and
/// episode endpoints. Fields the catalog may omit or null out are optional.
use super::Ordinal;
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as embedded in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Artwork links (null for shows without artwork)
    #[serde(default)]
    pub image: Option<TvMazeImage>,
}

/// Artwork links of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    #[serde(default)]
    pub original: Option<String>,
}

/// A single entry of the `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    #[serde(default)]
    pub name: Option<String>,
    /// Season number (0 for specials)
    #[serde(default)]
    pub season: Option<Ordinal>,
    /// Episode number within the season (null for specials)
    #[serde(default)]
    pub number: Option<Ordinal>,
}
