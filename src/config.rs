//! Runtime configuration

use crate::catalog::{DEFAULT_BASE_URL, DEFAULT_IMAGE_URL};

/// How responses of overlapping requests for the same view region are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RacePolicy {
    /// Only the response of the most recently issued request is applied.
    /// Older responses are discarded as superseded.
    #[default]
    LatestIssued,
    /// Every response is applied when it arrives, so the last one to
    /// complete wins regardless of issue order.
    LastCompleted,
}

/// Configuration of a show finder session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the catalog API
    pub base_url: String,
    /// Artwork URL substituted for shows without an image
    pub default_image: String,
    /// How overlapping responses are resolved
    pub race_policy: RacePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_image: DEFAULT_IMAGE_URL.to_string(),
            race_policy: RacePolicy::default(),
        }
    }
}
