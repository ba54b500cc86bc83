//! Analysis provider trait and request construction.

use crate::core::Result;
use crate::ingest::{EventRecord, SlaType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Structured view of one breach record sent to the analysis service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub endpoint: String,
    pub partner: String,
    pub sla_type: SlaType,
    pub expected_sla: f64,
    pub actual_value: f64,
    pub retry_count: u32,
    pub infra_status: String,
    pub third_party_status: String,
    pub timestamp: String,
}

impl AnalysisRequest {
    /// Build a request from a validated breach record.
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            endpoint: record.endpoint.clone(),
            partner: record.partner.clone(),
            sla_type: record.sla_type.clone(),
            expected_sla: record.expected_sla,
            actual_value: record.actual_value,
            retry_count: record.retry_count,
            infra_status: record.infra_status.clone(),
            third_party_status: record.third_party_status.clone(),
            timestamp: record.timestamp.clone(),
        }
    }

    /// Render the prompt sent to the text-generation service.
    ///
    /// Asks for exactly three parts so the response parser can pick them out
    /// of the free-text answer.
    pub fn prompt(&self) -> String {
        format!(
            "Here is an SLA breach event:\n\n\
             - Endpoint: {}\n\
             - Partner: {}\n\
             - SLA Type: {}\n\
             - Expected SLA: {}\n\
             - Actual Value: {}\n\
             - Retry Count: {}\n\
             - Infra Status: {}\n\
             - Third Party Status: {}\n\
             - Timestamp: {}\n\n\
             Please provide:\n\
             1. A 1-line summary of what happened\n\
             2. The most likely cause (choose one: infra issue, third-party issue, time-based surge, unknown)\n\
             3. A suggested action for the DevOps team",
            self.endpoint,
            self.partner,
            self.sla_type,
            self.expected_sla,
            self.actual_value,
            self.retry_count,
            self.infra_status,
            self.third_party_status,
            self.timestamp,
        )
    }
}

/// An external text-generation collaborator.
///
/// Implementations return the raw free-text answer; parsing and failure
/// handling happen in the caller so that one bad response never affects
/// another record.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Analyze one breach event.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_request_from_record() {
        let request = AnalysisRequest::from_record(&record());
        assert_eq!(request.endpoint, "/api/pay");
        assert_eq!(request.sla_type, SlaType::ResponseTime);
        assert_eq!(request.actual_value, 350.0);
    }

    #[test]
    fn test_prompt_contains_all_fields() {
        let prompt = AnalysisRequest::from_record(&record()).prompt();
        assert!(prompt.contains("Endpoint: /api/pay"));
        assert!(prompt.contains("SLA Type: response_time"));
        assert!(prompt.contains("Expected SLA: 200"));
        assert!(prompt.contains("Retry Count: 3"));
        assert!(prompt.contains("time-based surge"));
    }
}
