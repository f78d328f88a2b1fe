//! Descriptive report views over the enriched review set.
//!
//! This module tree groups reviews by title, computes per-title summary
//! statistics, ranks the results, and derives the time-resampled and
//! distribution views the report subcommands export.

pub mod aggregate;
pub mod distribution;
pub mod trends;
pub mod types;
pub mod utility;
