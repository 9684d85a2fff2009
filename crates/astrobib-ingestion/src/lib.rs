//! astrobib-ingestion — CSV ingestion channels and row normalization.
//!
//! Raw tabular rows come in from three channels (the bundled primary
//! dataset, file uploads, URL downloads), get normalized into classified
//! [`models::Record`]s, and leave as whole batches ready for a store merge.
//! Normalization is a pure transform; all channel I/O lives in
//! [`csv_source`] and [`pipeline`].

pub mod csv_source;
pub mod models;
pub mod normalizer;
pub mod pipeline;

pub use models::{Impact, Provenance, RawRow, Record};
pub use normalizer::normalize;
