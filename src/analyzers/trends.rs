//! Time-resampled views of the enriched review set.

use crate::analyzers::types::{MonthlyVolume, YearlyScore};
use crate::analyzers::utility::mean;
use crate::records::EnrichedReview;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Mean review score per calendar year, chronologically ordered.
pub fn yearly_average_score(reviews: &[EnrichedReview]) -> Vec<YearlyScore> {
    let mut years: BTreeMap<i32, (f64, u64)> = BTreeMap::new();

    for review in reviews {
        let entry = years.entry(review.timestamp.year()).or_insert((0.0, 0));
        entry.0 += review.score;
        entry.1 += 1;
    }

    years
        .into_iter()
        .map(|(year, (sum, count))| YearlyScore {
            year,
            average_rating: mean(sum, count),
            review_count: count,
        })
        .collect()
}

/// Review count per calendar month, chronologically ordered.
pub fn monthly_review_counts(reviews: &[EnrichedReview]) -> Vec<MonthlyVolume> {
    let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for review in reviews {
        *months
            .entry((review.timestamp.year(), review.timestamp.month()))
            .or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), review_count)| MonthlyVolume {
            year,
            month,
            review_count,
        })
        .collect()
}

/// December-only subsequence of the monthly series, used to check for
/// a seasonal spike around Christmas.
pub fn december_review_counts(monthly: &[MonthlyVolume]) -> Vec<MonthlyVolume> {
    monthly.iter().filter(|m| m.month == 12).cloned().collect()
}
