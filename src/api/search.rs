//! Album search client.
//!
//! This module provides a client for the iTunes search endpoint
//! (itunes.apple.com/search). No authentication is required.

use reqwest::Client;
use tracing::{debug, error};

use crate::error::{ItunesError, Result};
use crate::models::AlbumSearchResponse;

/// iTunes search endpoint URL.
const SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Album search client.
///
/// Issues one search request per call and decodes the JSON payload into
/// an [`AlbumSearchResponse`]. Stateless; requests are never retried,
/// cached, or cancelled.
///
/// # Example
///
/// ```rust,no_run
/// use tunescout::AlbumSearchApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = AlbumSearchApi::new();
///     let response = api.search("Thriller").await?;
///     println!("{} albums", response.result_count);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AlbumSearchApi {
    client: Client,
}

impl Default for AlbumSearchApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AlbumSearchApi {
    /// Create a new album search client.
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("tunescout/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Build the search request for a query term.
    ///
    /// The query serializer percent-encodes `term`; `media` and `entity`
    /// are fixed to music albums.
    fn request(&self, term: &str) -> reqwest::RequestBuilder {
        self.client
            .get(SEARCH_URL)
            .query(&[("term", term), ("media", "music"), ("entity", "album")])
    }

    /// Search albums by free-text query.
    ///
    /// The caller guarantees `term` is non-empty. Network failures
    /// (transport error, non-2xx status, empty body) and decode failures
    /// are distinguished by [`ItunesError::is_transport`]; both are
    /// terminal for this request.
    pub async fn search(&self, term: &str) -> Result<AlbumSearchResponse> {
        debug!("GET {} term={:?}", SEARCH_URL, term);

        let response = self.request(term).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Search for {:?} answered {}", term, status);
            return Err(ItunesError::Status(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ItunesError::EmptyBody);
        }

        let decoded: AlbumSearchResponse = serde_json::from_slice(&body)?;
        debug!("Search for {:?} returned {} albums", term, decoded.result_count);
        Ok(decoded)
    }
}
