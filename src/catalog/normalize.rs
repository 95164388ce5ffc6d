//! Shaping of raw catalog records into `Show` and `Episode`
//!
//! Raw records are parsed into the TVMaze response types first, so a record
//! missing a required field fails with a typed error instead of producing a
//! half-filled value.

use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{Episode, Show};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while normalizing a list of raw records
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A search result record did not have the expected shape
    #[error("Search result {index} is not a valid show record: {source}")]
    MalformedShow {
        index: usize,
        source: serde_json::Error,
    },

    /// An episode record did not have the expected shape
    #[error("Episode record {index} is not valid: {source}")]
    MalformedEpisode {
        index: usize,
        source: serde_json::Error,
    },
}

/// Converts one raw search result into a `Show`
///
/// The artwork is taken from `show.image.original`. When the show has no
/// image, or its original is null or empty, `default_image` is used instead.
/// A missing or null summary becomes the empty string.
pub fn to_show(raw: &Value, default_image: &str) -> Result<Show, serde_json::Error> {
    let result = TvMazeSearchResult::deserialize(raw)?;
    let show = result.show;

    let image = show
        .image
        .and_then(|image| image.original)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default_image.to_string());

    Ok(Show {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    })
}

/// Converts one raw episode record into an `Episode`
pub fn to_episode(raw: &Value) -> Result<Episode, serde_json::Error> {
    let episode = TvMazeEpisode::deserialize(raw)?;

    Ok(Episode {
        id: episode.id,
        name: episode.name,
        season: episode.season,
        number: episode.number,
    })
}

/// Converts raw search results into shows, preserving their order
///
/// Fails on the first malformed record, reporting its position.
pub fn to_shows(raws: &[Value], default_image: &str) -> Result<Vec<Show>, NormalizeError> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| {
            to_show(raw, default_image)
                .map_err(|source| NormalizeError::MalformedShow { index, source })
        })
        .collect()
}

/// Converts raw episode records into episodes, preserving their order
pub fn to_episodes(raws: &[Value]) -> Result<Vec<Episode>, NormalizeError> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| {
            to_episode(raw).map_err(|source| NormalizeError::MalformedEpisode { index, source })
        })
        .collect()
}
