//! Classify Module
//!
//! The breach-classification and tagging engine:
//! - Per-record SLA verdicts
//! - Contributing-condition context tags
//! - Combined immutable verdicts

pub mod classifier;
pub mod tags;
pub mod verdict;

pub use classifier::{classify, SlaStatus};
pub use tags::{context_tags, join_tags, ContextTag};
pub use verdict::Verdict;
