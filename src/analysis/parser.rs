//! Free-text analysis response parsing.
//!
//! The service answers with up to three parts in order: summary, likely
//! cause, suggested action. The parser takes the first three non-empty lines
//! and strips any leading ordinal or bullet marker. Missing parts degrade to
//! the empty string; a wholly unusable response becomes the failure sentinel.

use serde::{Deserialize, Serialize};

/// Sentinel summary written when the collaborator failed for a record.
pub const UNAVAILABLE_SUMMARY: &str = "analysis unavailable";

/// Sentinel cause, kept inside the fixed cause vocabulary.
pub const UNAVAILABLE_CAUSE: &str = "unknown";

/// Parsed three-part analysis of one breach.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachAnalysis {
    /// One-line summary of what happened
    pub summary: String,
    /// Likely cause: infra issue, third-party issue, time-based surge, unknown
    pub likely_cause: String,
    /// Suggested remediation for the operator
    pub suggested_action: String,
}

impl BreachAnalysis {
    /// The failure sentinel: service unavailable, timed out, or unparseable.
    pub fn unavailable() -> Self {
        Self {
            summary: UNAVAILABLE_SUMMARY.to_string(),
            likely_cause: UNAVAILABLE_CAUSE.to_string(),
            suggested_action: String::new(),
        }
    }

    /// Whether this is the failure sentinel.
    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }
}

/// Strip a leading ordinal (`1.`, `2)`) or bullet (`-`, `*`) marker.
fn strip_marker(line: &str) -> &str {
    let line = line.trim();
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim_start();
        }
    }
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        return rest.trim_start();
    }
    line
}

/// Parse a free-text response into its three parts.
pub fn parse_response(text: &str) -> BreachAnalysis {
    let mut parts = text
        .lines()
        .map(strip_marker)
        .filter(|line| !line.is_empty());

    let summary = parts.next().unwrap_or_default().to_string();
    let likely_cause = parts.next().unwrap_or_default().to_string();
    let suggested_action = parts.next().unwrap_or_default().to_string();

    if summary.is_empty() {
        return BreachAnalysis::unavailable();
    }

    BreachAnalysis {
        summary,
        likely_cause,
        suggested_action,
    }
}
