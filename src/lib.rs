//! # SLA Sentinel
//!
//! The breach-classification engine behind an SLA monitoring dashboard:
//! - **ingest**: decode uploaded JSON/CSV event logs into typed records
//! - **classify**: per-record SLA verdicts and context tags
//! - **report**: batch statistics and annotated CSV export
//! - **analysis**: GenAI breach summaries through an external collaborator
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sla_sentinel::config::PipelineConfig;
//! use sla_sentinel::ingest::ContentType;
//! use sla_sentinel::pipeline::Pipeline;
//! use sla_sentinel::report;
//!
//! fn main() -> sla_sentinel::Result<()> {
//!     let input = std::fs::read("latency_logs.json")?;
//!     let batch = Pipeline::new(PipelineConfig::new()).process(&input, ContentType::Json)?;
//!
//!     println!(
//!         "{} events, {} breaches, {:.1}% compliant",
//!         batch.summary.total, batch.summary.breach_count, batch.summary.compliance_rate
//!     );
//!     std::fs::write("report.csv", report::write_full(&batch)?)?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod classify;
pub mod config;
pub mod core;
pub mod ingest;
pub mod pipeline;
pub mod report;

pub use crate::core::error::{Error, Result};

/// Install the default tracing subscriber.
///
/// For host applications that have not set up their own subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}
