//! Data models for iTunes API responses.
//!
//! This module contains the data structures used to represent album
//! search results and track lookups, plus their display helpers.

pub mod album;
pub mod track;

// Re-exports for convenience
pub use album::{currency_symbol, Album, AlbumSearchResponse};
pub use track::{Track, TrackLookupResponse};
