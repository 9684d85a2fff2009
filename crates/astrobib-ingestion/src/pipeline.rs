//! Ingestion channel orchestration.
//!
//! Each channel produces a fully-built batch of records before anything is
//! merged into a store, so readers never observe a partial batch:
//!   1. obtain CSV text (bundled file, uploaded body, or fetched URL)
//!   2. decode rows
//!   3. normalize every row against the caller-supplied id offset
//!
//! Primary-load failures are recovered locally: the pipeline logs and
//! returns an empty batch rather than failing startup.

use std::path::Path;

use astrobib_common::Result;
use rand::Rng;
use tracing::{info, warn};

use crate::csv_source::parse_csv;
use crate::models::{Provenance, Record};
use crate::normalizer::normalize;

/// Decode CSV text and normalize every row into a batch.
///
/// `id_offset` must be the current store size; ids are assigned
/// `id_offset + index + 1` in row order.
pub fn build_batch(
    text: &str,
    id_offset: usize,
    channel: Provenance,
    rng: &mut impl Rng,
) -> Result<Vec<Record>> {
    let rows = parse_csv(text)?;
    let records: Vec<Record> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| normalize(row, i, id_offset, channel, rng))
        .collect();
    info!(
        channel = channel.as_str(),
        rows = rows.len(),
        records = records.len(),
        "built ingestion batch"
    );
    Ok(records)
}

/// Load the primary dataset from disk. A missing or unparsable file is not
/// fatal: the failure is logged and an empty batch is returned so the
/// process starts with an empty store.
pub fn load_primary(path: &Path, rng: &mut impl Rng) -> Vec<Record> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "primary dataset unavailable, starting empty");
            return Vec::new();
        }
    };
    match build_batch(&text, 0, Provenance::NasaPublications, rng) {
        Ok(records) => records,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "primary dataset unparsable, starting empty");
            Vec::new()
        }
    }
}
