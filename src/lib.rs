//! show_finder - Search a TV show catalog and browse episodes
//!
//! This library searches the TVMaze show catalog, normalizes the results into
//! `Show` and `Episode` records and keeps an explicit view state that can be
//! rendered as HTML or as plain text.

pub mod catalog;
mod config;
mod controller;
pub mod view;

pub use catalog::{CatalogClient, CatalogError, Episode, NormalizeError, Ordinal, Show, TvMazeClient};
pub use config::{Config, RacePolicy};
pub use controller::{Controller, ControllerError, Outcome};
pub use view::{Panel, ViewState};

use thiserror::Error;

/// Top-level error type for show_finder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error while handling a search or episode request
    #[error(transparent)]
    Controller(#[from] ControllerError),

    /// Error while prompting the user
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Error while rendering the HTML view
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Creates a controller backed by the TVMaze API at `config.base_url`
///
/// # Examples
///
/// ```no_run
/// use show_finder::{Config, connect, view};
///
/// let controller = connect(Config::default());
/// controller.search("girls").unwrap();
/// controller.show_episodes_at(0).unwrap();
/// println!("{}", view::html::render(&controller.view()).unwrap());
/// ```
pub fn connect(config: Config) -> Controller<TvMazeClient> {
    let client = TvMazeClient::with_base_url(&config.base_url);
    Controller::new(client, config)
}
