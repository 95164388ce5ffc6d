/// TVMaze catalog client implementation.
use super::{CatalogClient, CatalogError, DEFAULT_BASE_URL};
use reqwest::{StatusCode, Url};
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::{debug, warn};

const CLIENT_USER_AGENT: &str = concat!("show_finder/", env!("CARGO_PKG_VERSION"));

/// Catalog client for the TVMaze API.
///
/// This client queries the show search endpoint and the per-show episode
/// listing of https://api.tvmaze.com, or of any server exposing the same API.
pub struct TvMazeClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a client talking to the public TVMaze API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client talking to the API rooted at `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the show search URL, encoding the term as the `q` parameter.
    fn search_url(&self, term: &str) -> Result<Url, CatalogError> {
        Url::parse_with_params(&format!("{}/search/shows", self.base_url), &[("q", term)])
            .map_err(|e| CatalogError::RequestError(e.to_string()))
    }

    /// Builds the episode listing URL for a show.
    fn episodes_url(&self, show_id: u64) -> Result<Url, CatalogError> {
        Url::parse(&format!("{}/shows/{}/episodes", self.base_url, show_id))
            .map_err(|e| CatalogError::RequestError(e.to_string()))
    }

    /// Issues a GET request and parses the body as a JSON array of records.
    fn fetch_records(&self, url: Url) -> Result<Vec<Value>, CatalogError> {
        debug!(%url, "requesting catalog records");

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .map_err(|e| {
                warn!(%url, error = %e, "catalog request failed");
                CatalogError::RequestError(e.to_string())
            })?;

        check_status(response.status(), &url)?;

        let body = response.text().map_err(|e| {
            warn!(%url, error = %e, "failed to read catalog response");
            CatalogError::RequestError(e.to_string())
        })?;
        let records = parse_records(&body).inspect_err(|e| {
            warn!(%url, error = %e, "catalog response is not a JSON array");
        })?;

        debug!(%url, count = records.len(), "received catalog records");
        Ok(records)
    }
}

/// Maps a non-success status to `CatalogError::HttpStatus`.
fn check_status(status: StatusCode, url: &Url) -> Result<(), CatalogError> {
    if status.is_success() {
        return Ok(());
    }

    warn!(%url, status = status.as_u16(), "catalog answered with an error status");
    Err(CatalogError::HttpStatus {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

/// Parses a response body that must be a JSON array of records.
fn parse_records(body: &str) -> Result<Vec<Value>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::ParseError(e.to_string()))
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient for TvMazeClient {
    fn search_shows(&self, term: &str) -> Result<Vec<Value>, CatalogError> {
        let url = self.search_url(term)?;
        self.fetch_records(url)
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Value>, CatalogError> {
        let url = self.episodes_url(show_id)?;
        self.fetch_records(url)
    }
}
