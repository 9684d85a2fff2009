//! Append-only publication store.
//!
//! Records only ever arrive as whole batches (primary load, file upload,
//! URL download). The store never reorders, never mutates existing
//! entries, never deduplicates, and never shrinks. Callers needing id
//! uniqueness pass `len()` as the normalizer's id offset before building
//! the next batch.

use astrobib_ingestion::Record;
use tracing::info;

/// Ordered, append-only collection of [`Record`]s.
#[derive(Debug, Default)]
pub struct PublicationStore {
    records: Vec<Record>,
}

impl PublicationStore {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Merge a fully-built batch, preserving its order.
    pub fn append(&mut self, batch: Vec<Record>) {
        if batch.is_empty() {
            return;
        }
        info!(merged = batch.len(), total = self.records.len() + batch.len(), "store merge");
        self.records.extend(batch);
    }

    /// Read-only snapshot of all records in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
