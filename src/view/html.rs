//! HTML projection of the view state
//!
//! Produces the page fragment consumed by the surrounding markup: a
//! `#showsList` container with one `.Show` block per show and an
//! `#episodesArea` panel listing the episodes of the selected show.

use super::{Panel, ViewState, episode_label};
use crate::catalog::Show;
use askama::Template;

/// Template for the show list and the episode panel
///
/// Values are escaped by askama, except for the show summary, which holds
/// catalog markup.
#[derive(Template)]
#[template(path = "view.html")]
struct ViewTemplate<'a> {
    shows: &'a [Show],
    /// Set while the episode panel is visible
    panel_show_id: Option<u64>,
    episodes: Vec<String>,
}

/// Renders the complete view as an HTML fragment
pub fn render(view: &ViewState) -> Result<String, askama::Error> {
    let (panel_show_id, episodes) = match view.panel() {
        Panel::Hidden => (None, Vec::new()),
        Panel::Showing { show_id, episodes } => (
            Some(*show_id),
            episodes.iter().map(episode_label).collect(),
        ),
    };

    ViewTemplate {
        shows: view.shows(),
        panel_show_id,
        episodes,
    }
    .render()
}
