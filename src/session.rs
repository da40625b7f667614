//! Search session controller.
//!
//! This module owns the mutable state behind one search screen: the
//! displayed album list, the display status, and the last query for
//! retry. It bridges user intent to the two API clients and reconciles
//! their outcomes, including responses from overlapping searches.

use tracing::debug;

use crate::api::{AlbumSearchApi, TrackLookupApi};
use crate::error::Result;
use crate::models::{Album, AlbumSearchResponse, Track, TrackLookupResponse};

/// Which placeholder/error/result surface the consumer should show.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayStatus {
    /// Nothing searched yet, or the query was cleared with no results stored.
    #[default]
    Idle,
    /// A search succeeded with at least one album.
    HasResults,
    /// A search succeeded with zero albums.
    NoResults,
    /// A search failed; carries the user-facing message.
    Error(String),
}

/// An issued search, tagged with a monotonically increasing sequence number.
///
/// Handed out by [`SearchSession::begin_search`] and redeemed through
/// [`SearchSession::apply_search`]; the sequence number lets the session
/// discard responses that arrive after a newer search has already been
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    seq: u64,
}

impl SearchRequest {
    /// The query this request was issued for.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What the detail collaborator receives after selecting an album.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackListing {
    tracks: Vec<Track>,
    track_count: u32,
    error: Option<String>,
}

impl TrackListing {
    /// Build a listing from a lookup outcome. The response is expected to
    /// have its summary record already stripped.
    pub fn from_lookup(outcome: Result<TrackLookupResponse>) -> Self {
        match outcome {
            Ok(response) => Self {
                track_count: response.result_count,
                tracks: response.results,
                error: None,
            },
            Err(err) => Self {
                tracks: Vec::new(),
                track_count: 0,
                error: Some(err.to_string()),
            },
        }
    }

    /// Listing for an album that cannot be drilled into. Not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tracks in response order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Displayed track count (raw count minus the summary record, clamped
    /// to 0 when no data is available).
    pub fn track_count(&self) -> u32 {
        self.track_count
    }

    /// The failure message, when the lookup failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Controller for one search screen.
///
/// Owns the two API clients and the displayed state. All mutation goes
/// through `&mut self`, so outcomes are applied one at a time even when
/// the underlying requests overlap.
///
/// # Example
///
/// ```rust,no_run
/// use tunescout::{DisplayStatus, SearchSession};
///
/// #[tokio::main]
/// async fn main() {
///     let mut session = SearchSession::new();
///     session.search("Thriller").await;
///     if let DisplayStatus::HasResults = session.status() {
///         for album in session.albums() {
///             println!("{} — {}", album.artist_name, album.collection_name);
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    search_api: AlbumSearchApi,
    lookup_api: TrackLookupApi,
    status: DisplayStatus,
    albums: Vec<Album>,
    last_query: Option<String>,
    next_seq: u64,
    applied_seq: Option<u64>,
}

impl SearchSession {
    /// Create a session in the [`DisplayStatus::Idle`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display status.
    pub fn status(&self) -> &DisplayStatus {
        &self.status
    }

    /// Currently displayed albums, in response order.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// The most recently issued query, kept verbatim for retry.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Start a search for `query`.
    ///
    /// Returns `None` for an empty query: no request is built, no network
    /// call may be made, and the status returns to [`DisplayStatus::Idle`]
    /// when no results are stored. Otherwise records the query for retry
    /// and hands out a sequence-tagged [`SearchRequest`].
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        if query.is_empty() {
            if self.albums.is_empty() {
                self.status = DisplayStatus::Idle;
            }
            return None;
        }

        self.last_query = Some(query.to_string());
        self.next_seq += 1;
        Some(SearchRequest {
            query: query.to_string(),
            seq: self.next_seq,
        })
    }

    /// Apply the outcome of a search request.
    ///
    /// Last arrival wins, strengthened by sequence numbers: an outcome
    /// whose request is older than the newest already applied is discarded.
    /// Otherwise the stored album list is replaced wholesale and the status
    /// derived from the outcome; failures are never silently dropped.
    pub fn apply_search(&mut self, request: &SearchRequest, outcome: Result<AlbumSearchResponse>) {
        if let Some(applied) = self.applied_seq {
            if request.seq < applied {
                debug!(
                    "Discarding stale response for {:?} (seq {} < {})",
                    request.query, request.seq, applied
                );
                return;
            }
        }
        self.applied_seq = Some(request.seq);

        match outcome {
            Ok(response) if response.result_count > 0 => {
                self.albums = response.results;
                self.status = DisplayStatus::HasResults;
            }
            Ok(_) => {
                self.albums.clear();
                self.status = DisplayStatus::NoResults;
            }
            Err(err) => {
                self.albums.clear();
                self.status = DisplayStatus::Error(err.to_string());
            }
        }
    }

    /// Run one search to completion: begin, await the API, apply.
    ///
    /// An empty query makes no network call.
    pub async fn search(&mut self, query: &str) {
        let Some(request) = self.begin_search(query) else {
            return;
        };
        let outcome = self.search_api.search(request.query()).await;
        self.apply_search(&request, outcome);
    }

    /// Re-issue the last search query verbatim. No-op when no search was
    /// ever issued. Never triggered automatically.
    pub async fn retry(&mut self) {
        if let Some(query) = self.last_query.clone() {
            self.search(&query).await;
        }
    }

    /// Fetch the track listing for a selected album.
    ///
    /// An album without a collection id cannot be looked up; the detail
    /// collaborator receives an empty listing rather than an error.
    pub async fn select_album(&self, album: &Album) -> TrackListing {
        match album.collection_id {
            Some(id) => TrackListing::from_lookup(self.lookup_api.tracks(id).await),
            None => TrackListing::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItunesError;

    fn album(name: &str) -> Album {
        Album {
            collection_name: name.to_string(),
            ..Default::default()
        }
    }

    fn response(albums: Vec<Album>) -> AlbumSearchResponse {
        AlbumSearchResponse {
            result_count: albums.len() as u32,
            results: albums,
        }
    }

    #[test]
    fn test_initial_status_is_idle() {
        let session = SearchSession::new();
        assert_eq!(*session.status(), DisplayStatus::Idle);
        assert!(session.albums().is_empty());
        assert_eq!(session.last_query(), None);
    }

    #[test]
    fn test_empty_query_builds_no_request() {
        let mut session = SearchSession::new();
        assert!(session.begin_search("").is_none());
        assert_eq!(*session.status(), DisplayStatus::Idle);
        assert_eq!(session.last_query(), None);
    }

    #[test]
    fn test_empty_query_keeps_status_when_results_stored() {
        let mut session = SearchSession::new();
        let request = session.begin_search("abba").unwrap();
        session.apply_search(&request, Ok(response(vec![album("Arrival")])));
        assert_eq!(*session.status(), DisplayStatus::HasResults);

        // Clearing the query with results on screen does not reset them.
        assert!(session.begin_search("").is_none());
        assert_eq!(*session.status(), DisplayStatus::HasResults);
        assert_eq!(session.albums().len(), 1);
    }

    #[test]
    fn test_success_with_results() {
        let mut session = SearchSession::new();
        let request = session.begin_search("thriller").unwrap();
        session.apply_search(
            &request,
            Ok(response(vec![album("Thriller"), album("Thriller 25")])),
        );
        assert_eq!(*session.status(), DisplayStatus::HasResults);
        assert_eq!(session.albums().len(), 2);
        assert_eq!(session.albums()[0].collection_name, "Thriller");
        assert_eq!(session.last_query(), Some("thriller"));
    }

    #[test]
    fn test_success_without_results_clears_list() {
        let mut session = SearchSession::new();
        let first = session.begin_search("abba").unwrap();
        session.apply_search(&first, Ok(response(vec![album("Arrival")])));

        let second = session.begin_search("qqqqzzzz").unwrap();
        session.apply_search(&second, Ok(response(vec![])));
        assert_eq!(*session.status(), DisplayStatus::NoResults);
        assert!(session.albums().is_empty());
    }

    #[test]
    fn test_failure_sets_error_status_with_message() {
        let mut session = SearchSession::new();
        let first = session.begin_search("abba").unwrap();
        session.apply_search(&first, Ok(response(vec![album("Arrival")])));

        let second = session.begin_search("abba").unwrap();
        session.apply_search(&second, Err(ItunesError::EmptyBody));
        match session.status() {
            DisplayStatus::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected error status, got {:?}", other),
        }
        assert!(session.albums().is_empty());
    }

    #[test]
    fn test_last_arrival_wins_discards_stale_response() {
        let mut session = SearchSession::new();
        let older = session.begin_search("first").unwrap();
        let newer = session.begin_search("second").unwrap();

        // The newer request's response arrives first and is applied.
        session.apply_search(&newer, Ok(response(vec![album("Second Album")])));
        // The older request's response arrives late and must be discarded.
        session.apply_search(&older, Ok(response(vec![album("First Album")])));

        assert_eq!(session.albums().len(), 1);
        assert_eq!(session.albums()[0].collection_name, "Second Album");
        assert_eq!(*session.status(), DisplayStatus::HasResults);
    }

    #[test]
    fn test_stale_error_does_not_clobber_newer_results() {
        let mut session = SearchSession::new();
        let older = session.begin_search("first").unwrap();
        let newer = session.begin_search("second").unwrap();

        session.apply_search(&newer, Ok(response(vec![album("Second Album")])));
        session.apply_search(&older, Err(ItunesError::EmptyBody));

        assert_eq!(*session.status(), DisplayStatus::HasResults);
        assert_eq!(session.albums()[0].collection_name, "Second Album");
    }

    #[test]
    fn test_responses_in_issue_order_apply_normally() {
        let mut session = SearchSession::new();
        let older = session.begin_search("first").unwrap();
        let newer = session.begin_search("second").unwrap();

        session.apply_search(&older, Ok(response(vec![album("First Album")])));
        session.apply_search(&newer, Ok(response(vec![album("Second Album")])));

        assert_eq!(session.albums()[0].collection_name, "Second Album");
    }

    #[test]
    fn test_track_listing_from_failed_lookup() {
        let listing = TrackListing::from_lookup(Err(ItunesError::MissingSummary));
        assert!(listing.tracks().is_empty());
        assert_eq!(listing.track_count(), 0);
        assert!(listing.error().is_some());
    }

    #[test]
    fn test_track_listing_for_album_without_id() {
        let listing = TrackListing::empty();
        assert!(listing.tracks().is_empty());
        assert_eq!(listing.track_count(), 0);
        assert!(listing.error().is_none());
    }

    #[tokio::test]
    async fn test_select_album_without_id_skips_lookup() {
        let session = SearchSession::new();
        let no_id = album("Mystery Album");
        let listing = session.select_album(&no_id).await;
        assert!(listing.tracks().is_empty());
        assert!(listing.error().is_none());
    }

    #[tokio::test]
    async fn test_search_with_empty_query_stays_idle() {
        let mut session = SearchSession::new();
        session.search("").await;
        assert_eq!(*session.status(), DisplayStatus::Idle);
    }

    #[tokio::test]
    async fn test_retry_without_prior_search_is_noop() {
        let mut session = SearchSession::new();
        session.retry().await;
        assert_eq!(*session.status(), DisplayStatus::Idle);
        assert_eq!(session.last_query(), None);
    }
}
