//! Data models for the ingestion pipeline.

use std::collections::HashMap;

use astrobib_classify::{Organism, Topic};
use serde::{Deserialize, Serialize};

/// A raw tabular row as decoded from CSV: header name → cell value.
/// Column naming is heterogeneous across sources; the normalizer resolves
/// it through static alias tables.
pub type RawRow = HashMap<String, String>;

/// Which ingestion channel produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "NASA Publications")]
    NasaPublications,
    #[serde(rename = "Uploaded Data")]
    UploadedData,
    #[serde(rename = "Downloaded")]
    Downloaded,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::NasaPublications => "NASA Publications",
            Provenance::UploadedData     => "Uploaded Data",
            Provenance::Downloaded       => "Downloaded",
        }
    }

    /// Mission sentinel used when the row carries no mission column.
    pub fn default_mission(&self) -> &'static str {
        match self {
            Provenance::NasaPublications => "ISS",
            Provenance::UploadedData     => "Custom",
            Provenance::Downloaded       => "Downloaded",
        }
    }

    /// Placeholder title for rows missing one.
    pub fn untitled(&self) -> &'static str {
        match self {
            Provenance::NasaPublications => "Untitled Publication",
            Provenance::UploadedData | Provenance::Downloaded => "Untitled",
        }
    }

    /// Upper bound (exclusive) of the synthetic citation range.
    pub fn citation_ceiling(&self) -> u32 {
        match self {
            Provenance::NasaPublications => 100,
            Provenance::UploadedData | Provenance::Downloaded => 50,
        }
    }
}

/// Coarse impact tag. Synthesized when the source supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High   => "High",
            Impact::Medium => "Medium",
        }
    }
}

/// One classified publication entry.
///
/// Invariants: `id` is unique and strictly increasing in insertion order
/// within a store; `topic` and `organism` are closed-set labels; `year`
/// is a 4-digit integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub year: i32,
    pub topic: Topic,
    pub organism: Organism,
    pub mission: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub citations: u32,
    pub impact: Impact,
    pub source: Provenance,
}
