//! Helpfulness-ratio distributions.

use crate::analyzers::types::RatioSample;
use crate::records::EnrichedReview;

/// The full helpfulness-ratio column.
pub fn helpfulness_ratios(reviews: &[EnrichedReview]) -> Vec<RatioSample> {
    reviews
        .iter()
        .map(|r| RatioSample {
            helpfulness_ratio: r.helpfulness_ratio,
        })
        .collect()
}

/// The ratio column restricted to reviews with at least `min_votes`
/// total votes; low-sample ratios are too noisy to plot.
pub fn helpfulness_ratios_with_min_votes(
    reviews: &[EnrichedReview],
    min_votes: u32,
) -> Vec<RatioSample> {
    reviews
        .iter()
        .filter(|r| r.total_votes >= min_votes)
        .map(|r| RatioSample {
            helpfulness_ratio: r.helpfulness_ratio,
        })
        .collect()
}
