//! # tunescout
//!
//! A Rust client for searching albums and browsing tracks in the iTunes
//! catalog.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`SearchSession`]
//! struct:
//!
//! ```rust,no_run
//! use tunescout::{DisplayStatus, SearchSession};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut session = SearchSession::new();
//!
//!     // Search the catalog and inspect the outcome
//!     session.search("Thriller").await;
//!     match session.status() {
//!         DisplayStatus::HasResults => {
//!             for album in session.albums() {
//!                 println!("{} — {}", album.artist_name, album.collection_name);
//!             }
//!         }
//!         DisplayStatus::NoResults => println!("No results"),
//!         DisplayStatus::Error(message) => println!("{}", message),
//!         DisplayStatus::Idle => println!("Start your search"),
//!     }
//!
//!     // Drill into an album's tracks
//!     if let Some(album) = session.albums().first() {
//!         let listing = session.select_album(album).await;
//!         println!("Tracks count: {}", listing.track_count());
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - **Album search** over the iTunes search endpoint
//! - **Track listings** per album, with the collection summary record
//!   stripped automatically
//! - **Session state machine** with retry and stale-response discard for
//!   overlapping searches
//!
//! ## Low-Level APIs
//!
//! For more control, you can use the two clients directly:
//!
//! - [`AlbumSearchApi`] - free-text album search
//! - [`TrackLookupApi`] - per-album track lookup

pub mod api;
pub mod error;
pub mod models;
pub mod session;

pub use api::{AlbumSearchApi, TrackLookupApi};
pub use error::{ItunesError, Result};
pub use models::{currency_symbol, Album, AlbumSearchResponse, Track, TrackLookupResponse};
pub use session::{DisplayStatus, SearchRequest, SearchSession, TrackListing};
