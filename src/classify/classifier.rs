//! Breach classification.
//!
//! Judges one event against its own SLA threshold. The verdict is a pure
//! function of the record; no cross-record state is consulted.

use crate::ingest::{EventRecord, SlaType};
use serde::{Deserialize, Serialize};

/// Verdict for a single SLA event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlaStatus {
    /// Measurement within the SLA
    #[serde(rename = "OK")]
    Ok,
    /// Measurement violates the SLA
    #[serde(rename = "BREACH")]
    Breach,
    /// SLA type not recognized, or the record could not be validated
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SlaStatus {
    /// Wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaStatus::Ok => "OK",
            SlaStatus::Breach => "BREACH",
            SlaStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify one event against its SLA.
///
/// Latency-style SLAs breach above the threshold, rate-style SLAs breach
/// below it. Equality is compliant in both directions.
pub fn classify(record: &EventRecord) -> SlaStatus {
    match &record.sla_type {
        SlaType::ResponseTime => {
            if record.actual_value > record.expected_sla {
                SlaStatus::Breach
            } else {
                SlaStatus::Ok
            }
        }
        SlaType::SuccessRate => {
            if record.actual_value < record.expected_sla {
                SlaStatus::Breach
            } else {
                SlaStatus::Ok
            }
        }
        SlaType::Other(_) => SlaStatus::Unknown,
    }
}
