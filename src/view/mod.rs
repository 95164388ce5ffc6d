//! View state and its projections
//!
//! `ViewState` records what is currently displayed: the show list from the
//! last applied search and the episode panel. Rendering is a projection of
//! this state, see the `html` and `text` modules.

pub mod html;
pub mod text;

use crate::catalog::{Episode, Show};

/// State of the episode panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    /// No episodes are displayed
    #[default]
    Hidden,
    /// The episodes of one show are displayed
    Showing { show_id: u64, episodes: Vec<Episode> },
}

impl Panel {
    /// Whether episodes are currently displayed
    pub fn is_visible(&self) -> bool {
        matches!(self, Panel::Showing { .. })
    }
}

/// Everything currently displayed to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    shows: Vec<Show>,
    panel: Panel,
}

impl ViewState {
    /// Creates an empty view with the episode panel hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed shows, in the order they were rendered.
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// The current state of the episode panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Resolves the show displayed at `position` to its identifier.
    pub fn show_id_at(&self, position: usize) -> Option<u64> {
        self.shows.get(position).map(|show| show.id)
    }

    /// Replaces the displayed show list with `shows`, keeping their order.
    pub fn render_shows(&mut self, shows: Vec<Show>) {
        self.shows = shows;
    }

    /// Displays `episodes` for the show `show_id` and makes the panel visible.
    ///
    /// Any previously displayed episodes are replaced.
    pub fn render_episodes(&mut self, show_id: u64, episodes: Vec<Episode>) {
        self.panel = Panel::Showing { show_id, episodes };
    }

    /// Hides the episode panel, discarding its episodes.
    pub fn hide_episodes(&mut self) {
        self.panel = Panel::Hidden;
    }
}

/// Formats an episode as `NAME (season S, number N)`.
///
/// Values the catalog did not deliver are shown as `unknown`.
pub(crate) fn episode_label(episode: &Episode) -> String {
    let name = episode.name.as_deref().unwrap_or("unknown");
    let season = episode
        .season
        .as_ref()
        .map_or_else(|| "unknown".to_string(), ToString::to_string);
    let number = episode
        .number
        .as_ref()
        .map_or_else(|| "unknown".to_string(), ToString::to_string);

    format!("{name} (season {season}, number {number})")
}
