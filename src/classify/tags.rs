//! Context tagging.
//!
//! Attaches contributing-condition labels to a record independently of its
//! SLA verdict. Tags are independent of each other; all that apply are
//! included, in a fixed display order.

use crate::ingest::EventRecord;
use serde::{Deserialize, Serialize};

/// Retry count at or above which an event is tagged `high_retries`.
pub const HIGH_RETRY_THRESHOLD: u32 = 2;

/// Infra status value that triggers the `infra_load` tag.
pub const INFRA_HIGH_LOAD: &str = "high_load";

/// Third-party status value that triggers the `third_party_degraded` tag.
pub const THIRD_PARTY_DEGRADED: &str = "degraded";

/// A contributing-condition label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextTag {
    HighRetries,
    InfraLoad,
    ThirdPartyDegraded,
}

impl ContextTag {
    /// Wire name of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextTag::HighRetries => "high_retries",
            ContextTag::InfraLoad => "infra_load",
            ContextTag::ThirdPartyDegraded => "third_party_degraded",
        }
    }
}

impl std::fmt::Display for ContextTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evaluate the three tag conditions directly.
///
/// Usable even when the record failed validation, since the tag inputs are
/// all optional fields with defaults.
pub fn evaluate(retry_count: u32, infra_status: &str, third_party_status: &str) -> Vec<ContextTag> {
    let mut tags = Vec::new();
    if retry_count >= HIGH_RETRY_THRESHOLD {
        tags.push(ContextTag::HighRetries);
    }
    if infra_status == INFRA_HIGH_LOAD {
        tags.push(ContextTag::InfraLoad);
    }
    if third_party_status == THIRD_PARTY_DEGRADED {
        tags.push(ContextTag::ThirdPartyDegraded);
    }
    tags
}

/// Compute the context tags for a validated record.
pub fn context_tags(record: &EventRecord) -> Vec<ContextTag> {
    evaluate(
        record.retry_count,
        &record.infra_status,
        &record.third_party_status,
    )
}

/// Join tags into the display form used in reports.
pub fn join_tags(tags: &[ContextTag]) -> String {
    tags.iter()
        .map(ContextTag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
