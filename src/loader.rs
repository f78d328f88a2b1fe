//! CSV input loading.
//!
//! Reads the catalog and review files into typed record vectors,
//! matching columns by header name. Inputs with a `.gz` extension are
//! decompressed on the fly.

use crate::error::{PipelineError, PipelineResult};
use crate::records::{CatalogRecord, ReviewRecord};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

fn open_input(path: &Path) -> PipelineResult<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| PipelineError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(reader)
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> PipelineResult<Vec<T>> {
    debug!(path = %path.display(), "Loading CSV input");

    let mut rdr = csv::Reader::from_reader(open_input(path)?);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: T = result.map_err(|source| PipelineError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record);
    }

    Ok(rows)
}

/// Loads the book-catalog CSV.
pub fn load_catalog(path: &Path) -> PipelineResult<Vec<CatalogRecord>> {
    load_rows(path)
}

/// Loads the review CSV.
pub fn load_reviews(path: &Path) -> PipelineResult<Vec<ReviewRecord>> {
    load_rows(path)
}
