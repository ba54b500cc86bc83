//! Bounded-concurrency analysis over breach rows.
//!
//! Breach records are independent and I/O-bound, so their analysis calls run
//! through a small worker pool. Results merge back by record identity, never
//! by completion order. A failure or timeout on one record writes that
//! record's sentinel and touches nothing else.

use crate::analysis::parser::{parse_response, BreachAnalysis};
use crate::analysis::provider::{AnalysisProvider, AnalysisRequest};
use crate::pipeline::AnnotatedBatch;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Runs the analysis pass over a classified batch.
pub struct AnalysisRunner {
    provider: Arc<dyn AnalysisProvider>,
    timeout: Duration,
    max_concurrency: usize,
}

impl AnalysisRunner {
    /// Create a runner with default timeout and pool size.
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            provider,
            timeout: Duration::from_secs(30),
            max_concurrency: 4,
        }
    }

    /// Set the per-call timeout. Timeout is treated as service-unavailable.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker-pool size.
    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Annotate every breach row in the batch.
    ///
    /// Non-breach rows never reach the collaborator. Status and tags are
    /// left untouched for every row, whatever the collaborator does.
    pub async fn annotate(&self, batch: &mut AnnotatedBatch) {
        let jobs: Vec<(Uuid, AnalysisRequest)> = batch
            .records
            .iter()
            .filter(|row| row.is_breach())
            .filter_map(|row| {
                row.record
                    .as_ref()
                    .map(|record| (row.id, AnalysisRequest::from_record(record)))
            })
            .collect();

        if jobs.is_empty() {
            return;
        }
        debug!(breaches = jobs.len(), "running breach analysis");

        let results: HashMap<Uuid, BreachAnalysis> = stream::iter(jobs)
            .map(|(id, request)| {
                let provider = Arc::clone(&self.provider);
                let timeout = self.timeout;
                async move {
                    let analysis =
                        match tokio::time::timeout(timeout, provider.analyze(&request)).await {
                            Ok(Ok(text)) => parse_response(&text),
                            Ok(Err(err)) => {
                                warn!(record = %id, error = %err, "breach analysis failed");
                                BreachAnalysis::unavailable()
                            }
                            Err(_) => {
                                warn!(record = %id, "breach analysis timed out");
                                BreachAnalysis::unavailable()
                            }
                        };
                    (id, analysis)
                }
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        for row in batch.records.iter_mut() {
            if let Some(analysis) = results.get(&row.id) {
                row.analysis = Some(analysis.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::core::{Error, Result};
    use crate::ingest::ContentType;
    use crate::pipeline::Pipeline;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BATCH: &[u8] = br#"[
        {"sla_type": "response_time", "expected_sla": 200, "actual_value": 350,
         "endpoint": "/api/pay", "partner": "payu"},
        {"sla_type": "response_time", "expected_sla": 200, "actual_value": 100,
         "endpoint": "/api/status", "partner": "payu"},
        {"sla_type": "success_rate", "expected_sla": 99.9, "actual_value": 99.0,
         "endpoint": "/api/settle", "partner": "mindgate"}
    ]"#;

    struct ScriptedProvider {
        calls: AtomicUsize,
        fail_endpoint: Option<String>,
    }

    #[async_trait]
    impl AnalysisProvider for ScriptedProvider {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_endpoint.as_deref() == Some(request.endpoint.as_str()) {
                return Err(Error::AnalysisUnavailable("boom".to_string()));
            }
            Ok(format!(
                "1. Breach on {}\n2. infra issue\n3. Scale out",
                request.endpoint
            ))
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl AnalysisProvider for SlowProvider {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<String> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok("1. Too late".to_string())
        }
    }

    fn classified_batch() -> AnnotatedBatch {
        Pipeline::new(PipelineConfig::new())
            .process(BATCH, ContentType::Json)
            .unwrap()
    }

    #[tokio::test]
    async fn test_only_breach_rows_are_analyzed() {
        let provider = Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
            fail_endpoint: None,
        });
        let mut batch = classified_batch();
        AnalysisRunner::new(provider.clone()).annotate(&mut batch).await;

        // Two breaches, one OK row.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert!(batch.records[0].analysis.is_some());
        assert!(batch.records[1].analysis.is_none());
        assert!(batch.records[2].analysis.is_some());
    }

    #[tokio::test]
    async fn test_results_merge_by_record_identity() {
        let provider = Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
            fail_endpoint: None,
        });
        let mut batch = classified_batch();
        AnalysisRunner::new(provider)
            .with_concurrency(8)
            .annotate(&mut batch)
            .await;

        let pay = batch.records[0].analysis.as_ref().unwrap();
        assert_eq!(pay.summary, "Breach on /api/pay");
        let settle = batch.records[2].analysis.as_ref().unwrap();
        assert_eq!(settle.summary, "Breach on /api/settle");
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_other_records() {
        let provider = Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
            fail_endpoint: Some("/api/pay".to_string()),
        });
        let mut batch = classified_batch();
        let statuses_before: Vec<_> = batch.records.iter().map(|r| r.status).collect();

        AnalysisRunner::new(provider).annotate(&mut batch).await;

        let failed = batch.records[0].analysis.as_ref().unwrap();
        assert!(failed.is_unavailable());

        let healthy = batch.records[2].analysis.as_ref().unwrap();
        assert_eq!(healthy.likely_cause, "infra issue");

        // Verdicts are untouched by collaborator failures.
        let statuses_after: Vec<_> = batch.records.iter().map(|r| r.status).collect();
        assert_eq!(statuses_before, statuses_after);
    }

    #[tokio::test]
    async fn test_timeout_is_treated_as_unavailable() {
        let mut batch = classified_batch();
        AnalysisRunner::new(Arc::new(SlowProvider))
            .with_timeout(Duration::from_millis(10))
            .annotate(&mut batch)
            .await;

        for breach in batch.breaches() {
            assert!(breach.analysis.as_ref().unwrap().is_unavailable());
        }
    }

    #[test]
    fn test_no_breaches_skips_collaborator() {
        let provider = Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
            fail_endpoint: None,
        });
        let input = br#"[{"sla_type": "response_time", "expected_sla": 200, "actual_value": 100}]"#;
        let mut batch = Pipeline::new(PipelineConfig::new())
            .process(input, ContentType::Json)
            .unwrap();

        tokio_test::block_on(AnalysisRunner::new(provider.clone()).annotate(&mut batch));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}
