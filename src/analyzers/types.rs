//! Report row types consumed by the visualization layer.

use serde::Serialize;

/// Summary statistics for one normalized title.
#[derive(Debug, Clone, Serialize)]
pub struct TitleSummary {
    pub title: String,
    pub average_rating: f64,
    pub review_count: u64,
    pub avg_helpfulness: f64,
    pub rating_std_dev: f64,
}

/// Mean review score for one calendar year.
#[derive(Debug, Clone, Serialize)]
pub struct YearlyScore {
    pub year: i32,
    pub average_rating: f64,
    pub review_count: u64,
}

/// Review volume for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyVolume {
    pub year: i32,
    pub month: u32,
    pub review_count: u64,
}

/// Review volume for one distinct score value.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBucket {
    pub score: f64,
    pub review_count: u64,
}

/// One helpfulness-ratio observation, exported as a single-column table.
#[derive(Debug, Clone, Serialize)]
pub struct RatioSample {
    pub helpfulness_ratio: f64,
}
