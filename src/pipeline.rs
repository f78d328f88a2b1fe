//! Stage orchestration: load, normalize, join, enrich.
//!
//! Every report subcommand runs this same linear pass and then derives
//! its views from the returned enriched set.

use crate::enrich::{self, Enrichment};
use crate::error::PipelineResult;
use crate::join::join_reviews;
use crate::loader;
use crate::normalize::{normalize_catalog, normalize_reviews};
use std::path::Path;
use tracing::info;

/// Runs the data-preparation pipeline over the two input files.
pub fn run(books: &Path, ratings: &Path) -> PipelineResult<Enrichment> {
    let catalog = loader::load_catalog(books)?;
    info!(rows = catalog.len(), path = %books.display(), "Catalog loaded");

    let reviews = loader::load_reviews(ratings)?;
    info!(rows = reviews.len(), path = %ratings.display(), "Reviews loaded");

    let catalog = normalize_catalog(catalog);
    let reviews = normalize_reviews(reviews);

    let joined = join_reviews(&catalog, &reviews);
    info!(rows = joined.len(), "Catalog and reviews joined");

    enrich::enrich(joined)
}
