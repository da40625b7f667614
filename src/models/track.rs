//! Track-related models.
//!
//! The iTunes lookup endpoint always prefixes the track list with one
//! record describing the collection itself; [`TrackLookupResponse::strip_summary`]
//! removes it before anything downstream sees the data.

use serde::{Deserialize, Serialize};

use crate::error::{ItunesError, Result};

/// Decoded payload of the iTunes track lookup endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackLookupResponse {
    /// Number of records the endpoint reports. Raw responses count the
    /// leading collection summary record as well.
    pub result_count: u32,

    /// Records in response order.
    pub results: Vec<Track>,
}

/// One song entry from a track lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track display name.
    pub track_name: Option<String>,

    /// Link to the track in the iTunes store.
    pub track_view_url: Option<String>,
}

impl TrackLookupResponse {
    /// Remove the leading collection summary record and decrement the
    /// reported count accordingly.
    ///
    /// An empty raw sequence is an upstream defect and yields
    /// [`ItunesError::MissingSummary`] rather than an index panic.
    pub fn strip_summary(mut self) -> Result<Self> {
        if self.results.is_empty() {
            return Err(ItunesError::MissingSummary);
        }
        self.results.remove(0);
        self.result_count = self.result_count.saturating_sub(1);
        Ok(self)
    }
}
