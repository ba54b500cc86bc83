//! End-to-end batch processing.
//!
//! Ties the stages together: decode, validate, classify, tag, summarize, and
//! optionally enrich breach rows through the analysis collaborator. Each
//! record's verdict is computed independently; annotations are written once
//! and never mutated afterwards.

use crate::analysis::{AnalysisProvider, AnalysisRunner, BreachAnalysis};
use crate::classify::{join_tags, tags, ContextTag, SlaStatus, Verdict};
use crate::config::{MissingFieldPolicy, PipelineConfig};
use crate::core::Result;
use crate::ingest::{self, ContentType, EventRecord, RawRecord};
use crate::report::BatchSummary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// One input record with its computed annotations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// Stable identity; analysis results merge back by this, never by
    /// completion order
    pub id: Uuid,
    /// The wire row as uploaded, kept verbatim for export
    pub raw: RawRecord,
    /// Validated form; `None` when ingestion failed for this row
    pub record: Option<EventRecord>,
    /// SLA verdict
    pub status: SlaStatus,
    /// Context tags, in display order
    pub context: Vec<ContextTag>,
    /// Collaborator output, breach rows only
    pub analysis: Option<BreachAnalysis>,
    /// Per-record ingestion error, surfaced rather than dropped
    pub ingest_error: Option<String>,
}

impl AnnotatedRecord {
    /// The `context` column value for reports.
    pub fn context_joined(&self) -> String {
        join_tags(&self.context)
    }

    /// Whether this row breached its SLA.
    pub fn is_breach(&self) -> bool {
        self.status == SlaStatus::Breach
    }
}

/// A fully classified batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotatedBatch {
    /// Annotated rows, in input order
    pub records: Vec<AnnotatedRecord>,
    /// Aggregate figures
    pub summary: BatchSummary,
}

impl AnnotatedBatch {
    /// Iterate over breach rows.
    pub fn breaches(&self) -> impl Iterator<Item = &AnnotatedRecord> {
        self.records.iter().filter(|r| r.is_breach())
    }
}

/// The batch-processing pipeline.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Classify and tag already-decoded rows.
    pub fn classify_batch(&self, rows: Vec<RawRecord>) -> Result<AnnotatedBatch> {
        let mut records = Vec::with_capacity(rows.len());

        for (row_index, raw) in rows.into_iter().enumerate() {
            match raw.validate(row_index) {
                Ok(record) => {
                    let verdict = Verdict::judge(&record);
                    records.push(AnnotatedRecord {
                        id: Uuid::new_v4(),
                        raw,
                        record: Some(record),
                        status: verdict.status,
                        context: verdict.context_tags,
                        analysis: None,
                        ingest_error: None,
                    });
                }
                Err(err) => match self.config.missing_field_policy {
                    MissingFieldPolicy::Fail => return Err(err),
                    MissingFieldPolicy::Skip => {
                        warn!(row = row_index, error = %err, "skipping invalid record");
                    }
                    MissingFieldPolicy::MarkUnknown => {
                        warn!(row = row_index, error = %err, "marking invalid record UNKNOWN");
                        let context = tags::evaluate(
                            raw.retry_count.unwrap_or(0),
                            raw.infra_status.as_deref().unwrap_or(""),
                            raw.third_party_status.as_deref().unwrap_or(""),
                        );
                        records.push(AnnotatedRecord {
                            id: Uuid::new_v4(),
                            raw,
                            record: None,
                            status: SlaStatus::Unknown,
                            context,
                            analysis: None,
                            ingest_error: Some(err.to_string()),
                        });
                    }
                },
            }
        }

        let summary = BatchSummary::from_statuses(records.iter().map(|r| r.status));
        info!(
            total = summary.total,
            breaches = summary.breach_count,
            unknown = summary.unknown_count,
            "batch classified"
        );

        Ok(AnnotatedBatch { records, summary })
    }

    /// Decode an uploaded file and classify it.
    pub fn process(&self, input: &[u8], content_type: ContentType) -> Result<AnnotatedBatch> {
        let rows = ingest::parse(input, content_type)?;
        self.classify_batch(rows)
    }

    /// Decode, classify, and run the analysis pass over breach rows.
    pub async fn process_with_analysis(
        &self,
        input: &[u8],
        content_type: ContentType,
        provider: Arc<dyn AnalysisProvider>,
    ) -> Result<AnnotatedBatch> {
        let mut batch = self.process(input, content_type)?;

        let mut runner = AnalysisRunner::new(provider);
        if let Some(analysis) = &self.config.analysis {
            runner = runner
                .with_timeout(analysis.timeout)
                .with_concurrency(analysis.max_concurrency);
        }
        runner.annotate(&mut batch).await;

        Ok(batch)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::new())
    }
}
