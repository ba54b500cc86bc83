//! Batch-level summary statistics.

use crate::classify::SlaStatus;
use crate::core::{now, Timestamp};
use serde::{Deserialize, Serialize};

/// Aggregate counts over one classified batch.
///
/// A pure reduction; recomputing it from the same batch always yields the
/// same figures. An empty batch reports 0% breaches and 100% compliance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Total records in the batch
    pub total: usize,
    /// Records judged BREACH
    pub breach_count: usize,
    /// Records judged UNKNOWN
    pub unknown_count: usize,
    /// breach_count / total, as a percentage; 0 for the empty batch
    pub breach_percentage: f64,
    /// 100 minus the breach percentage
    pub compliance_rate: f64,
    /// When this summary was computed
    pub generated: Timestamp,
}

impl BatchSummary {
    /// Reduce a batch of statuses into summary figures.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = SlaStatus>,
    {
        let mut total = 0usize;
        let mut breach_count = 0usize;
        let mut unknown_count = 0usize;
        for status in statuses {
            total += 1;
            match status {
                SlaStatus::Breach => breach_count += 1,
                SlaStatus::Unknown => unknown_count += 1,
                SlaStatus::Ok => {}
            }
        }

        let breach_percentage = if total > 0 {
            breach_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            breach_count,
            unknown_count,
            breach_percentage,
            compliance_rate: 100.0 - breach_percentage,
            generated: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let summary = BatchSummary::from_statuses([]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.breach_count, 0);
        assert_eq!(summary.breach_percentage, 0.0);
        assert_eq!(summary.compliance_rate, 100.0);
    }

    #[test]
    fn test_mixed_batch() {
        let summary = BatchSummary::from_statuses([
            SlaStatus::Ok,
            SlaStatus::Breach,
            SlaStatus::Unknown,
            SlaStatus::Breach,
        ]);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.breach_count, 2);
        assert_eq!(summary.unknown_count, 1);
        assert_eq!(summary.breach_percentage, 50.0);
        assert_eq!(summary.compliance_rate, 50.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        for breaches in 0..=5 {
            let statuses = (0..5).map(|i| {
                if i < breaches {
                    SlaStatus::Breach
                } else {
                    SlaStatus::Ok
                }
            });
            let summary = BatchSummary::from_statuses(statuses);
            assert!((summary.breach_percentage + summary.compliance_rate - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let statuses = [SlaStatus::Breach, SlaStatus::Ok, SlaStatus::Ok];
        let first = BatchSummary::from_statuses(statuses);
        let second = BatchSummary::from_statuses(statuses);
        assert_eq!(first.total, second.total);
        assert_eq!(first.breach_count, second.breach_count);
        assert_eq!(first.breach_percentage, second.breach_percentage);
    }
}
