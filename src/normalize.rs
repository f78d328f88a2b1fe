//! Join-key canonicalization.
//!
//! Titles (and catalog authors) are lower-cased and stripped of leading
//! and trailing whitespace before the join so that cosmetic differences
//! between the two input files do not lose matches.

use crate::records::{CatalogRecord, ReviewRecord};

/// Lower-cases and trims a single text value. Idempotent.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes an optional value, passing missing values through unchanged.
pub fn normalize_opt(value: Option<&str>) -> Option<String> {
    value.map(normalize_text)
}

/// Returns a copy of the catalog with normalized title and author columns.
pub fn normalize_catalog(records: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
    records
        .into_iter()
        .map(|r| CatalogRecord {
            title: normalize_opt(r.title.as_deref()),
            authors: normalize_opt(r.authors.as_deref()),
        })
        .collect()
}

/// Returns a copy of the review set with a normalized title column.
pub fn normalize_reviews(records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
    records
        .into_iter()
        .map(|r| ReviewRecord {
            title: normalize_opt(r.title.as_deref()),
            ..r
        })
        .collect()
}
