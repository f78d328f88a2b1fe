//! Record types flowing through the pipeline stages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single row deserialized from the book-catalog CSV.
///
/// Only the columns used downstream are bound; the rest of the catalog
/// metadata is ignored at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "authors")]
    pub authors: Option<String>,
}

/// A single row deserialized from the review CSV.
///
/// Helpfulness and timestamp stay raw text here; the enrichment stage
/// owns their parsing and failure reporting.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "review/helpfulness")]
    pub helpfulness: String,
    #[serde(rename = "review/score")]
    pub score: f64,
    #[serde(rename = "review/time")]
    pub time_raw: String,
}

/// One matching (catalog, review) pair produced by the inner join.
#[derive(Debug, Clone)]
pub struct JoinedReview {
    pub title: String,
    pub authors: Option<String>,
    pub score: f64,
    pub helpfulness: String,
    pub time_raw: String,
}

/// A joined review with all derived fields resolved.
///
/// Invariants: `timestamp` is strictly after 1995-01-01T00:00:00Z,
/// `helpful_votes <= total_votes`, and `helpfulness_ratio` lies in
/// [0, 1] (0.0 when `total_votes` is 0, never NaN).
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedReview {
    pub title: String,
    pub authors: Option<String>,
    pub score: f64,
    pub timestamp: DateTime<Utc>,
    pub helpful_votes: u32,
    pub total_votes: u32,
    pub helpfulness_ratio: f64,
}
