//! Album-related models.
//!
//! This module contains the decoded shape of the iTunes search endpoint
//! and display helpers for album fields.

use serde::{Deserialize, Serialize};

/// Decoded payload of the iTunes album search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSearchResponse {
    /// Number of albums the endpoint reports.
    ///
    /// Well-formed responses satisfy `results.len() == result_count`;
    /// mismatches are tolerated and left to the caller.
    pub result_count: u32,

    /// Matching albums, in response order.
    pub results: Vec<Album>,
}

/// One album entry from the iTunes catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Artist display name.
    pub artist_name: String,

    /// Album display name.
    pub collection_name: String,

    /// Link to the album in the iTunes store.
    pub collection_view_url: String,

    /// 60x60 artwork URL.
    pub artwork_url_60: String,

    /// 100x100 artwork URL.
    pub artwork_url_100: String,

    /// Link to the artist page, when the catalog has one.
    pub artist_view_url: Option<String>,

    /// Album price; absent means the album is free.
    pub collection_price: Option<f64>,

    /// Explicitness marker, compared against the literal `"explicit"`.
    pub collection_explicitness: String,

    /// Copyright line.
    pub copyright: Option<String>,

    /// ISO-ish currency code ("USD", "EUR", "RUB" observed).
    pub currency: String,

    /// ISO-8601 date-time text, reformatted for display.
    pub release_date: String,

    /// Primary genre display name.
    pub primary_genre_name: String,

    /// Catalog identifier, required to look up the album's tracks.
    pub collection_id: Option<u64>,
}

/// Map a currency code to its display symbol.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "RUB" => Some("₽"),
        _ => None,
    }
}

impl Album {
    /// Price text for display: `"9.99 $"`, the raw code for an unknown
    /// currency, or `"Free"` when there is no price.
    pub fn price_label(&self) -> String {
        match self.collection_price {
            Some(price) => match currency_symbol(&self.currency) {
                Some(symbol) => format!("{} {}", price, symbol),
                None => format!("{} {}", price, self.currency),
            },
            None => "Free".to_string(),
        }
    }

    /// Release date formatted as e.g. `"Feb 09, 2018"`.
    ///
    /// Falls back to the raw ISO text when the date does not parse.
    pub fn release_date_label(&self) -> String {
        match chrono::DateTime::parse_from_rfc3339(&self.release_date) {
            Ok(date) => date.format("%b %d, %Y").to_string(),
            Err(_) => self.release_date.clone(),
        }
    }

    /// Whether the album is marked explicit.
    pub fn is_explicit(&self) -> bool {
        self.collection_explicitness == "explicit"
    }
}
