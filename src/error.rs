//! Error taxonomy for the review pipeline.
//!
//! Load failures cover the input files themselves; parse and validation
//! failures carry the 1-based data-row number of the offending review.
//! All variants are fatal to the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data in {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: review timestamp `{value}` is not valid epoch seconds")]
    TimestampParse { row: usize, value: String },

    #[error("row {row}: helpfulness field `{value}` is not of the form `helpful/total`")]
    HelpfulnessParse { row: usize, value: String },

    #[error("row {row}: review score {score} outside the expected 1-5 range")]
    ScoreRange { row: usize, score: f64 },

    #[error("row {row}: helpful votes {helpful} exceed total votes {total}")]
    VoteCount { row: usize, helpful: u32, total: u32 },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
