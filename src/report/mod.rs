//! Report Module
//!
//! Batch aggregation and annotated-report export:
//! - Summary statistics (totals, breach percentage, compliance rate)
//! - CSV export, full and breach-only

pub mod export;
pub mod summary;

pub use export::{export_file_name, write_breaches, write_full, ExportVariant, REPORT_COLUMNS};
pub use summary::BatchSummary;
