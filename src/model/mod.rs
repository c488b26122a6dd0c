//! Data model for the movies service.

use serde::{Deserialize, Serialize};

/// A movie record as returned by the upstream service.
///
/// Plain data shape only; the service defines no invariants beyond field
/// presence. `release_date` is an ISO-8601 calendar date kept as text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Movie {
    /// Numeric identifier assigned by the service.
    #[serde(rename = "movie_id")]
    pub id: i64,

    /// Title.
    pub name: String,

    /// Ordered list of cast members.
    pub cast: Vec<String>,

    /// Release year.
    pub year: i32,

    /// Release date (ISO-8601, e.g. "1999-03-31").
    pub release_date: String,
}
