//! API clients for the iTunes catalog.
//!
//! This module provides two clients:
//! - [`AlbumSearchApi`]: free-text album search
//! - [`TrackLookupApi`]: per-album track listing

pub mod lookup;
pub mod search;

pub use lookup::TrackLookupApi;
pub use search::AlbumSearchApi;
