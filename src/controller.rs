//! Interaction controller
//!
//! The controller owns the view state and implements the two user triggers:
//! submitting a search and asking for the episodes of a displayed show. Both
//! triggers fetch and normalize everything before touching the view, so a
//! failing request never leaves a partially updated view behind.

use crate::catalog::{CatalogClient, CatalogError, NormalizeError, to_episodes, to_shows};
use crate::config::{Config, RacePolicy};
use crate::view::ViewState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while handling a trigger
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The catalog request failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The catalog response could not be normalized
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    /// No show is displayed at the requested position
    #[error("No show displayed at position {0}")]
    NoShowAt(usize),
}

/// What happened to the response of a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered into the view
    Applied,
    /// A newer request for the same view region was issued meanwhile, the
    /// response was discarded
    Superseded,
}

/// Drives the view state from user triggers
///
/// Triggers take `&self` and may run concurrently from several threads.
/// Overlapping responses are resolved according to the configured
/// `RacePolicy`.
pub struct Controller<C> {
    client: C,
    config: Config,
    view: Mutex<ViewState>,
    /// Stamp of the most recently issued search
    search_generation: AtomicU64,
    /// Stamp of the most recently issued episode request or applied search
    episodes_generation: AtomicU64,
}

impl<C> Controller<C>
where
    C: CatalogClient,
{
    /// Creates a controller with an empty view
    pub fn new(client: C, config: Config) -> Self {
        Self {
            client,
            config,
            view: Mutex::new(ViewState::new()),
            search_generation: AtomicU64::new(0),
            episodes_generation: AtomicU64::new(0),
        }
    }

    /// Returns a copy of the current view state
    pub fn view(&self) -> ViewState {
        self.lock_view().clone()
    }

    /// Handles a submitted search
    ///
    /// On success the episode panel is hidden and the matching shows replace
    /// the displayed list.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog request fails or a result cannot be
    /// normalized. The view is left unchanged in that case.
    pub fn search(&self, term: &str) -> Result<Outcome, ControllerError> {
        let ticket = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(term, ticket, "searching shows");

        let shows = self
            .client
            .search_shows(term)
            .map_err(ControllerError::from)
            .and_then(|raws| Ok(to_shows(&raws, &self.config.default_image)?))
            .inspect_err(|e| warn!(term, error = %e, "search failed"))?;

        let mut view = self.lock_view();
        if !self.is_current(&self.search_generation, ticket) {
            info!(term, ticket, "discarding superseded search results");
            return Ok(Outcome::Superseded);
        }

        // Episode requests still in flight must not reopen the hidden panel
        self.episodes_generation.fetch_add(1, Ordering::SeqCst);
        view.hide_episodes();
        info!(term, count = shows.len(), "rendering shows");
        view.render_shows(shows);

        Ok(Outcome::Applied)
    }

    /// Handles a request for the episodes of the show `show_id`
    ///
    /// On success the episode panel shows the episodes of that show.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog request fails or an episode cannot be
    /// normalized. The view is left unchanged in that case.
    pub fn show_episodes(&self, show_id: u64) -> Result<Outcome, ControllerError> {
        let ticket = self.episodes_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(show_id, ticket, "fetching episodes");

        let episodes = self
            .client
            .fetch_episodes(show_id)
            .map_err(ControllerError::from)
            .and_then(|raws| Ok(to_episodes(&raws)?))
            .inspect_err(|e| warn!(show_id, error = %e, "episode request failed"))?;

        let mut view = self.lock_view();
        if !self.is_current(&self.episodes_generation, ticket) {
            info!(show_id, ticket, "discarding superseded episodes");
            return Ok(Outcome::Superseded);
        }

        info!(show_id, count = episodes.len(), "rendering episodes");
        view.render_episodes(show_id, episodes);

        Ok(Outcome::Applied)
    }

    /// Handles a click on the "Episodes" control of the show displayed at
    /// `position`
    pub fn show_episodes_at(&self, position: usize) -> Result<Outcome, ControllerError> {
        let show_id = self
            .lock_view()
            .show_id_at(position)
            .ok_or(ControllerError::NoShowAt(position))?;

        self.show_episodes(show_id)
    }

    /// Whether a response stamped with `ticket` may still be applied
    fn is_current(&self, generation: &AtomicU64, ticket: u64) -> bool {
        match self.config.race_policy {
            RacePolicy::LastCompleted => true,
            RacePolicy::LatestIssued => generation.load(Ordering::SeqCst) == ticket,
        }
    }

    fn lock_view(&self) -> MutexGuard<'_, ViewState> {
        // The view is only ever replaced wholesale, so a poisoned lock still
        // holds a consistent state
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
