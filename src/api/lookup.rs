//! Track lookup client.
//!
//! This module provides a client for the iTunes lookup endpoint
//! (itunes.apple.com/lookup), used to fetch the track listing of one album.

use reqwest::Client;
use tracing::{debug, error};

use crate::error::{ItunesError, Result};
use crate::models::TrackLookupResponse;

/// iTunes lookup endpoint URL.
const LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// Track lookup client.
///
/// Issues one lookup request per call and returns the decoded listing
/// with the leading collection summary record already stripped. Stateless;
/// nothing is cached across calls, not even for the same id.
#[derive(Debug, Clone)]
pub struct TrackLookupApi {
    client: Client,
}

impl Default for TrackLookupApi {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackLookupApi {
    /// Create a new track lookup client.
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("tunescout/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Build the lookup request for a collection id.
    fn request(&self, collection_id: u64) -> reqwest::RequestBuilder {
        let id = collection_id.to_string();
        self.client
            .get(LOOKUP_URL)
            .query(&[("id", id.as_str()), ("entity", "song")])
    }

    /// Fetch the track listing of an album by its collection id.
    ///
    /// The returned response has the collection summary record removed and
    /// `result_count` decremented; a raw payload with no records at all
    /// yields [`ItunesError::MissingSummary`].
    pub async fn tracks(&self, collection_id: u64) -> Result<TrackLookupResponse> {
        debug!("GET {} id={}", LOOKUP_URL, collection_id);

        let response = self.request(collection_id).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Lookup for {} answered {}", collection_id, status);
            return Err(ItunesError::Status(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ItunesError::EmptyBody);
        }

        let decoded: TrackLookupResponse = serde_json::from_slice(&body)?;
        debug!(
            "Lookup for {} returned {} records",
            collection_id, decoded.result_count
        );
        decoded.strip_summary()
    }
}
