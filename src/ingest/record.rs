//! Event records and ingestion-time validation.
//!
//! Rows arrive loosely typed from JSON or CSV and are validated exactly once
//! into a strongly typed [`EventRecord`]. Required fields are `sla_type`,
//! `expected_sla` and `actual_value`; everything else defaults to a documented
//! absent value.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// The kind of SLA a record is measured against.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlaType {
    /// Latency-style SLA: breached when the measurement exceeds the threshold.
    ResponseTime,
    /// Rate-style SLA: breached when the measurement falls below the threshold.
    SuccessRate,
    /// Anything else; such records are judged UNKNOWN.
    Other(String),
}

impl SlaType {
    /// Wire name of this SLA type.
    pub fn as_str(&self) -> &str {
        match self {
            SlaType::ResponseTime => "response_time",
            SlaType::SuccessRate => "success_rate",
            SlaType::Other(name) => name,
        }
    }
}

impl From<String> for SlaType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "response_time" => SlaType::ResponseTime,
            "success_rate" => SlaType::SuccessRate,
            _ => SlaType::Other(value),
        }
    }
}

impl From<SlaType> for String {
    fn from(value: SlaType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for SlaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw wire row as uploaded, before validation.
///
/// Every field is optional so that a single malformed row never aborts the
/// decode of the whole file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// SLA kind, e.g. "response_time"
    #[serde(default)]
    pub sla_type: Option<String>,
    /// Threshold the measurement is judged against
    #[serde(default)]
    pub expected_sla: Option<f64>,
    /// The measurement itself
    #[serde(default)]
    pub actual_value: Option<f64>,
    /// Retry attempts observed for this event
    #[serde(default)]
    pub retry_count: Option<u32>,
    /// Free-form infrastructure status, e.g. "high_load"
    #[serde(default)]
    pub infra_status: Option<String>,
    /// Free-form third-party status, e.g. "degraded"
    #[serde(default)]
    pub third_party_status: Option<String>,
    /// Identifying fields, opaque to the classifier
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RawRecord {
    /// Validate this row into a typed [`EventRecord`].
    ///
    /// `row` is the zero-based position in the uploaded batch, used only for
    /// error reporting.
    pub fn validate(&self, row: usize) -> Result<EventRecord> {
        let sla_type = self
            .sla_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingField {
                row,
                field: "sla_type",
            })?;
        let expected_sla = self.expected_sla.ok_or(Error::MissingField {
            row,
            field: "expected_sla",
        })?;
        let actual_value = self.actual_value.ok_or(Error::MissingField {
            row,
            field: "actual_value",
        })?;

        Ok(EventRecord {
            sla_type: SlaType::from(sla_type.to_string()),
            expected_sla,
            actual_value,
            retry_count: self.retry_count.unwrap_or(0),
            infra_status: self.infra_status.clone().unwrap_or_default(),
            third_party_status: self.third_party_status.clone().unwrap_or_default(),
            endpoint: self.endpoint.clone().unwrap_or_default(),
            partner: self.partner.clone().unwrap_or_default(),
            timestamp: self.timestamp.clone().unwrap_or_default(),
        })
    }
}

/// A validated SLA event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// SLA kind
    pub sla_type: SlaType,
    /// Threshold the measurement is judged against
    pub expected_sla: f64,
    /// The measurement itself
    pub actual_value: f64,
    /// Retry attempts, default 0
    pub retry_count: u32,
    /// Infrastructure status, default empty
    pub infra_status: String,
    /// Third-party status, default empty
    pub third_party_status: String,
    /// Monitored endpoint, opaque
    pub endpoint: String,
    /// Partner identifier, opaque
    pub partner: String,
    /// Event timestamp, opaque to the classifier
    pub timestamp: String,
}
