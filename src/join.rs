//! Inner join of the catalog and review sets on normalized title.

use crate::records::{CatalogRecord, JoinedReview, ReviewRecord};
use std::collections::HashMap;
use tracing::debug;

/// Joins reviews against the catalog on title equality.
///
/// The join is many-to-many: every matching (catalog, review) pair
/// produces one output row, so a title repeated in the catalog
/// multiplies its reviews. Titles present on only one side, and rows
/// with a missing title, contribute nothing. Both inputs are expected
/// to be normalized already.
pub fn join_reviews(catalog: &[CatalogRecord], reviews: &[ReviewRecord]) -> Vec<JoinedReview> {
    let mut by_title: HashMap<&str, Vec<&CatalogRecord>> = HashMap::new();
    for record in catalog {
        if let Some(title) = record.title.as_deref() {
            by_title.entry(title).or_default().push(record);
        }
    }

    let mut joined = Vec::new();
    for review in reviews {
        let Some(title) = review.title.as_deref() else {
            continue;
        };
        let Some(matches) = by_title.get(title) else {
            continue;
        };

        for entry in matches {
            joined.push(JoinedReview {
                title: title.to_string(),
                authors: entry.authors.clone(),
                score: review.score,
                helpfulness: review.helpfulness.clone(),
                time_raw: review.time_raw.clone(),
            });
        }
    }

    debug!(
        catalog_rows = catalog.len(),
        review_rows = reviews.len(),
        joined_rows = joined.len(),
        "Join complete"
    );

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_catalog, normalize_reviews};

    fn catalog_row(title: Option<&str>, authors: Option<&str>) -> CatalogRecord {
        CatalogRecord {
            title: title.map(str::to_string),
            authors: authors.map(str::to_string),
        }
    }

    fn review_row(title: Option<&str>, score: f64) -> ReviewRecord {
        ReviewRecord {
            title: title.map(str::to_string),
            helpfulness: "1/2".to_string(),
            score,
            time_raw: "946684800".to_string(),
        }
    }

    #[test]
    fn test_matching_titles_join() {
        let catalog = vec![catalog_row(Some("the hobbit"), Some("j. r. r. tolkien"))];
        let reviews = vec![review_row(Some("the hobbit"), 5.0)];

        let joined = join_reviews(&catalog, &reviews);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].title, "the hobbit");
        assert_eq!(joined[0].authors.as_deref(), Some("j. r. r. tolkien"));
        assert_eq!(joined[0].score, 5.0);
    }

    #[test]
    fn test_unmatched_titles_drop_silently() {
        let catalog = vec![catalog_row(Some("the hobbit"), None)];
        let reviews = vec![
            review_row(Some("the hobbit"), 4.0),
            review_row(Some("dune"), 5.0),
        ];

        let joined = join_reviews(&catalog, &reviews);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].title, "the hobbit");
    }

    #[test]
    fn test_repeated_catalog_titles_multiply_rows() {
        // Two catalog entries for the same title, three reviews: six pairs.
        let catalog = vec![
            catalog_row(Some("dune"), Some("frank herbert")),
            catalog_row(Some("dune"), Some("herbert, frank")),
        ];
        let reviews = vec![
            review_row(Some("dune"), 5.0),
            review_row(Some("dune"), 3.0),
            review_row(Some("dune"), 1.0),
        ];

        let joined = join_reviews(&catalog, &reviews);
        assert_eq!(joined.len(), 6);
    }

    #[test]
    fn test_missing_titles_never_match() {
        let catalog = vec![catalog_row(None, Some("anonymous"))];
        let reviews = vec![review_row(None, 5.0)];

        assert!(join_reviews(&catalog, &reviews).is_empty());
    }

    #[test]
    fn test_join_after_normalization_bridges_case_and_whitespace() {
        let catalog = normalize_catalog(vec![catalog_row(
            Some(" The Hobbit "),
            Some("J. R. R. Tolkien"),
        )]);
        let reviews = normalize_reviews(vec![review_row(Some("the hobbit"), 5.0)]);

        let joined = join_reviews(&catalog, &reviews);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].title, "the hobbit");
    }
}
