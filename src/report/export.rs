//! Annotated report export.
//!
//! Writes the derived report as UTF-8 comma-separated text: the input
//! columns, then `SLA_Status`, `context`, and the three analysis columns
//! (empty for non-breach rows). Two variants: the full batch, and the
//! breach-only subset.

use crate::classify::SlaStatus;
use crate::core::{Result, Timestamp};
use crate::pipeline::{AnnotatedBatch, AnnotatedRecord};

/// Column order of the exported report.
pub const REPORT_COLUMNS: [&str; 14] = [
    "sla_type",
    "expected_sla",
    "actual_value",
    "retry_count",
    "infra_status",
    "third_party_status",
    "endpoint",
    "partner",
    "timestamp",
    "SLA_Status",
    "context",
    "summary",
    "likely_cause",
    "suggested_action",
];

/// Which rows an export carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportVariant {
    /// Every record in the batch
    Full,
    /// Breach rows only
    BreachesOnly,
}

impl ExportVariant {
    fn file_tag(&self) -> &'static str {
        match self {
            ExportVariant::Full => "full_report",
            ExportVariant::BreachesOnly => "breaches",
        }
    }
}

/// Export the full annotated batch as CSV bytes.
pub fn write_full(batch: &AnnotatedBatch) -> Result<Vec<u8>> {
    write_rows(batch.records.iter())
}

/// Export only the breach rows as CSV bytes.
pub fn write_breaches(batch: &AnnotatedBatch) -> Result<Vec<u8>> {
    write_rows(batch.records.iter().filter(|r| r.status == SlaStatus::Breach))
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows<'a, I>(rows: I) -> Result<Vec<u8>>
where
    I: Iterator<Item = &'a AnnotatedRecord>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_COLUMNS)?;

    for row in rows {
        let analysis = row.analysis.clone().unwrap_or_default();
        writer.write_record([
            row.raw.sla_type.clone().unwrap_or_default(),
            format_number(row.raw.expected_sla),
            format_number(row.raw.actual_value),
            row.raw
                .retry_count
                .map(|v| v.to_string())
                .unwrap_or_default(),
            row.raw.infra_status.clone().unwrap_or_default(),
            row.raw.third_party_status.clone().unwrap_or_default(),
            row.raw.endpoint.clone().unwrap_or_default(),
            row.raw.partner.clone().unwrap_or_default(),
            row.raw.timestamp.clone().unwrap_or_default(),
            row.status.as_str().to_string(),
            row.context_joined(),
            analysis.summary,
            analysis.likely_cause,
            analysis.suggested_action,
        ])?;
    }

    writer.into_inner().map_err(|e| {
        crate::core::Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    })
}

/// Timestamped download file name, e.g. `latency_sla_full_report_20240601_1000.csv`.
pub fn export_file_name(report_name: &str, variant: ExportVariant, at: Timestamp) -> String {
    let slug = report_name.trim().to_lowercase().replace(' ', "_");
    format!(
        "{}_{}_{}.csv",
        slug,
        variant.file_tag(),
        at.format("%Y%m%d_%H%M")
    )
}
