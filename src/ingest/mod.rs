//! Ingest Module
//!
//! Decodes uploaded SLA log files into typed event records:
//! - Content-type dispatch (JSON or CSV, declared, never sniffed)
//! - Loosely typed wire rows
//! - One-time validation into strongly typed records

pub mod csv;
pub mod json;
pub mod record;

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

pub use record::{EventRecord, RawRecord, SlaType};

/// Declared format of an uploaded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Json,
    Csv,
}

impl ContentType {
    /// Resolve a declared MIME type or short name.
    pub fn from_declared(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "application/json" | "json" => Ok(ContentType::Json),
            "text/csv" | "csv" => Ok(ContentType::Csv),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Json => write!(f, "json"),
            ContentType::Csv => write!(f, "csv"),
        }
    }
}

/// Decode an uploaded file into raw rows according to its declared type.
pub fn parse(input: &[u8], content_type: ContentType) -> Result<Vec<RawRecord>> {
    match content_type {
        ContentType::Json => json::parse_json(input),
        ContentType::Csv => csv::parse_csv(input),
    }
}
