//! Combined verdict for a single record.

use crate::classify::classifier::{classify, SlaStatus};
use crate::classify::tags::{context_tags, join_tags, ContextTag};
use crate::ingest::EventRecord;
use serde::{Deserialize, Serialize};

/// Status plus context tags, computed once per record and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// SLA status
    pub status: SlaStatus,
    /// Contributing-condition tags, in display order
    pub context_tags: Vec<ContextTag>,
}

impl Verdict {
    /// Judge a validated record. Pure; depends on this record only.
    pub fn judge(record: &EventRecord) -> Self {
        Self {
            status: classify(record),
            context_tags: context_tags(record),
        }
    }

    /// The `context` column value for reports.
    pub fn context_joined(&self) -> String {
        join_tags(&self.context_tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::SlaType;

    fn record() -> EventRecord {
        EventRecord {
            sla_type: SlaType::ResponseTime,
            expected_sla: 200.0,
            actual_value: 350.0,
            retry_count: 3,
            infra_status: "high_load".to_string(),
            third_party_status: "normal".to_string(),
            endpoint: "/api/pay".to_string(),
            partner: "payu".to_string(),
            timestamp: "2024-06-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_breach_with_context() {
        let verdict = Verdict::judge(&record());
        assert_eq!(verdict.status, SlaStatus::Breach);
        assert_eq!(
            verdict.context_tags,
            vec![ContextTag::HighRetries, ContextTag::InfraLoad]
        );
        assert_eq!(verdict.context_joined(), "high_retries, infra_load");
    }

    #[test]
    fn test_ok_with_no_context() {
        let event = EventRecord {
            sla_type: SlaType::SuccessRate,
            expected_sla: 99.9,
            actual_value: 99.95,
            retry_count: 0,
            infra_status: "normal".to_string(),
            third_party_status: "normal".to_string(),
            endpoint: String::new(),
            partner: String::new(),
            timestamp: String::new(),
        };
        let verdict = Verdict::judge(&event);
        assert_eq!(verdict.status, SlaStatus::Ok);
        assert!(verdict.context_tags.is_empty());
    }

    #[test]
    fn test_judge_is_deterministic() {
        let event = record();
        assert_eq!(Verdict::judge(&event), Verdict::judge(&event));
    }
}
