//! Per-title summary statistics and ranked views.

use crate::analyzers::types::{ScoreBucket, TitleSummary};
use crate::analyzers::utility::{mean, sample_stddev};
use crate::records::EnrichedReview;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Default)]
struct TitleAccumulator {
    count: u64,
    score_sum: f64,
    score_sq_sum: f64,
    ratio_sum: f64,
}

/// Groups the enriched set by title in one linear pass and finalizes a
/// [`TitleSummary`] per group, sorted by title for deterministic output.
pub fn summarize_titles(reviews: &[EnrichedReview]) -> Vec<TitleSummary> {
    let mut groups: HashMap<&str, TitleAccumulator> = HashMap::new();

    for review in reviews {
        let acc = groups.entry(review.title.as_str()).or_default();
        acc.count += 1;
        acc.score_sum += review.score;
        acc.score_sq_sum += review.score * review.score;
        acc.ratio_sum += review.helpfulness_ratio;
    }

    let mut summaries: Vec<TitleSummary> = groups
        .into_iter()
        .map(|(title, acc)| TitleSummary {
            title: title.to_string(),
            average_rating: mean(acc.score_sum, acc.count),
            review_count: acc.count,
            avg_helpfulness: mean(acc.ratio_sum, acc.count),
            rating_std_dev: sample_stddev(acc.count, acc.score_sum, acc.score_sq_sum),
        })
        .collect();
    summaries.sort_by(|a, b| a.title.cmp(&b.title));

    debug!(
        reviews = reviews.len(),
        titles = summaries.len(),
        "Title summaries computed"
    );

    summaries
}

/// Keeps only summaries backed by at least `min_reviews` reviews.
pub fn filter_by_volume(summaries: &[TitleSummary], min_reviews: u64) -> Vec<TitleSummary> {
    summaries
        .iter()
        .filter(|s| s.review_count >= min_reviews)
        .cloned()
        .collect()
}

/// Sorts summaries by mean score, best first. Ties break by title so
/// identical inputs always rank identically.
pub fn rank_by_rating(summaries: &[TitleSummary]) -> Vec<TitleSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.average_rating
            .total_cmp(&a.average_rating)
            .then_with(|| a.title.cmp(&b.title))
    });
    ranked
}

/// Sorts summaries by score standard deviation, most polarizing first,
/// truncated to the top `top` titles.
pub fn rank_by_divisiveness(summaries: &[TitleSummary], top: usize) -> Vec<TitleSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.rating_std_dev
            .total_cmp(&a.rating_std_dev)
            .then_with(|| a.title.cmp(&b.title))
    });
    ranked.truncate(top);
    ranked
}

/// Review count per distinct score value, ascending by score.
pub fn score_distribution(reviews: &[EnrichedReview]) -> Vec<ScoreBucket> {
    // Scores are keyed at centi-point precision so f64 values can live
    // in an ordered map.
    let mut buckets: BTreeMap<i64, u64> = BTreeMap::new();
    for review in reviews {
        *buckets
            .entry((review.score * 100.0).round() as i64)
            .or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|(key, review_count)| ScoreBucket {
            score: key as f64 / 100.0,
            review_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn review(title: &str, score: f64, ratio: f64) -> EnrichedReview {
        EnrichedReview {
            title: title.to_string(),
            authors: None,
            score,
            timestamp: DateTime::from_timestamp(946_684_800, 0).unwrap(),
            helpful_votes: 1,
            total_votes: 2,
            helpfulness_ratio: ratio,
        }
    }

    fn summary(title: &str, average_rating: f64, review_count: u64, std_dev: f64) -> TitleSummary {
        TitleSummary {
            title: title.to_string(),
            average_rating,
            review_count,
            avg_helpfulness: 0.5,
            rating_std_dev: std_dev,
        }
    }

    #[test]
    fn test_summarize_titles_statistics() {
        let reviews = vec![
            review("dune", 5.0, 1.0),
            review("dune", 4.0, 0.0),
            review("dune", 4.0, 0.5),
            review("dune", 3.0, 0.5),
            review("the hobbit", 5.0, 1.0),
        ];

        let summaries = summarize_titles(&reviews);

        assert_eq!(summaries.len(), 2);
        let dune = &summaries[0];
        assert_eq!(dune.title, "dune");
        assert_eq!(dune.review_count, 4);
        assert_eq!(dune.average_rating, 4.0);
        assert_eq!(dune.avg_helpfulness, 0.5);
        assert!((dune.rating_std_dev - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_single_review_title_has_zero_std_dev() {
        let summaries = summarize_titles(&[review("dune", 5.0, 1.0)]);
        assert_eq!(summaries[0].rating_std_dev, 0.0);
    }

    #[test]
    fn test_filter_by_volume_boundary() {
        let summaries = vec![
            summary("at threshold", 4.0, 50, 0.1),
            summary("under threshold", 5.0, 49, 0.1),
        ];

        let filtered = filter_by_volume(&summaries, 50);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "at threshold");
    }

    #[test]
    fn test_filter_by_volume_without_threshold_keeps_everything() {
        let summaries = vec![summary("a", 4.0, 1, 0.0), summary("b", 5.0, 49, 0.1)];
        assert_eq!(filter_by_volume(&summaries, 0).len(), summaries.len());
    }

    #[test]
    fn test_rank_by_rating_is_non_increasing() {
        let summaries = vec![
            summary("a", 3.5, 60, 0.2),
            summary("b", 4.8, 60, 0.4),
            summary("c", 4.1, 60, 0.1),
        ];

        let ranked = rank_by_rating(&summaries);

        for pair in ranked.windows(2) {
            assert!(pair[0].average_rating >= pair[1].average_rating);
        }
        assert_eq!(ranked[0].title, "b");
    }

    #[test]
    fn test_rank_by_divisiveness_takes_top_n() {
        let summaries = vec![
            summary("calm", 4.0, 60, 0.1),
            summary("split", 3.0, 60, 2.0),
            summary("mixed", 3.5, 60, 1.2),
        ];

        let ranked = rank_by_divisiveness(&summaries, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].title, "split");
        assert_eq!(ranked[1].title, "mixed");
    }

    #[test]
    fn test_score_distribution_counts_and_order() {
        let reviews = vec![
            review("a", 5.0, 0.0),
            review("a", 1.0, 0.0),
            review("b", 5.0, 0.0),
        ];

        let buckets = score_distribution(&reviews);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].score, 1.0);
        assert_eq!(buckets[0].review_count, 1);
        assert_eq!(buckets[1].score, 5.0);
        assert_eq!(buckets[1].review_count, 2);

        let total: u64 = buckets.iter().map(|b| b.review_count).sum();
        assert_eq!(total, reviews.len() as u64);
    }
}
