//! Plain text projection of the view state for terminal output

use super::{Panel, ViewState, episode_label};

/// Renders the view for display in a terminal
///
/// Show summaries are converted from HTML to plain text.
pub fn render(view: &ViewState) -> String {
    let mut out = String::new();

    if view.shows().is_empty() {
        out.push_str("No shows.\n");
    }

    for (index, show) in view.shows().iter().enumerate() {
        out.push_str(&format!("[{}] {} (id {})\n", index + 1, show.name, show.id));
        out.push_str(&format!("    Image: {}\n", show.image));

        let summary = nanohtml2text::html2text(&show.summary);
        let summary = summary.trim();
        if !summary.is_empty() {
            out.push_str(&format!("    {}\n", summary));
        }
    }

    if let Panel::Showing { show_id, episodes } = view.panel() {
        out.push_str(&format!("\nEpisodes of show {}:\n", show_id));
        if episodes.is_empty() {
            out.push_str("  (none)\n");
        }
        for episode in episodes {
            out.push_str(&format!("  - {}\n", episode_label(episode)));
        }
    }

    out
}
