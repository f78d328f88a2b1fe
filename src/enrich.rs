//! Cleaning and derivation over the joined review set.
//!
//! Order matters here: the timestamp is parsed first, rows at or before
//! the epoch floor are dropped next, and only surviving rows have their
//! helpfulness field split and validated.

use crate::error::{PipelineError, PipelineResult};
use crate::normalize::normalize_text;
use crate::records::{EnrichedReview, JoinedReview};
use chrono::DateTime;
use tracing::info;

/// 1995-01-01T00:00:00Z, the first day reviews could exist in the
/// source domain. Rows at or before this instant are corrupt.
pub const EPOCH_FLOOR_SECS: i64 = 788_918_400;

/// The enriched review set plus the count of rows discarded by the
/// epoch-floor rule.
#[derive(Debug)]
pub struct Enrichment {
    pub reviews: Vec<EnrichedReview>,
    pub dropped_pre_epoch: usize,
}

/// Splits an "X/Y" helpfulness field into (helpful, total) vote counts.
///
/// Returns `None` unless the field contains exactly one `/` with a
/// non-negative integer on each side.
pub fn parse_helpfulness(raw: &str) -> Option<(u32, u32)> {
    let (helpful, total) = raw.split_once('/')?;
    if total.contains('/') {
        return None;
    }
    Some((helpful.parse().ok()?, total.parse().ok()?))
}

/// Helpful votes as a fraction of total votes, 0.0 when there are none.
pub fn helpfulness_ratio(helpful: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(helpful) / f64::from(total)
    }
}

/// Resolves every derived field on the joined rows.
///
/// # Errors
///
/// Fatal on the first malformed timestamp or helpfulness field
/// (`TimestampParse` / `HelpfulnessParse`), out-of-range score
/// (`ScoreRange`), or helpful count exceeding the total (`VoteCount`).
/// Rows failing only the epoch-floor rule are dropped and counted, not
/// errors.
pub fn enrich(joined: Vec<JoinedReview>) -> PipelineResult<Enrichment> {
    let mut reviews = Vec::with_capacity(joined.len());
    let mut dropped_pre_epoch = 0usize;

    for (idx, row) in joined.into_iter().enumerate() {
        let row_no = idx + 1;

        let secs: i64 =
            row.time_raw
                .trim()
                .parse()
                .map_err(|_| PipelineError::TimestampParse {
                    row: row_no,
                    value: row.time_raw.clone(),
                })?;
        let Some(timestamp) = DateTime::from_timestamp(secs, 0) else {
            return Err(PipelineError::TimestampParse {
                row: row_no,
                value: row.time_raw.clone(),
            });
        };

        if secs <= EPOCH_FLOOR_SECS {
            dropped_pre_epoch += 1;
            continue;
        }

        let (helpful_votes, total_votes) = parse_helpfulness(&row.helpfulness).ok_or_else(|| {
            PipelineError::HelpfulnessParse {
                row: row_no,
                value: row.helpfulness.clone(),
            }
        })?;

        if !(1.0..=5.0).contains(&row.score) {
            return Err(PipelineError::ScoreRange {
                row: row_no,
                score: row.score,
            });
        }
        if helpful_votes > total_votes {
            return Err(PipelineError::VoteCount {
                row: row_no,
                helpful: helpful_votes,
                total: total_votes,
            });
        }

        reviews.push(EnrichedReview {
            title: normalize_text(&row.title),
            authors: row.authors,
            score: row.score,
            timestamp,
            helpful_votes,
            total_votes,
            helpfulness_ratio: helpfulness_ratio(helpful_votes, total_votes),
        });
    }

    info!(
        kept = reviews.len(),
        dropped_pre_epoch, "Enrichment complete"
    );

    Ok(Enrichment {
        reviews,
        dropped_pre_epoch,
    })
}
