//! Analysis Module
//!
//! The external text-generation collaborator, invoked for breach rows only:
//! - Provider trait and prompt construction
//! - Chat-completions HTTP client
//! - Response parsing with explicit failure sentinel
//! - Bounded-concurrency runner with per-call timeout

pub mod client;
pub mod parser;
pub mod provider;
pub mod runner;

pub use client::OpenAiClient;
pub use parser::{parse_response, BreachAnalysis};
pub use provider::{AnalysisProvider, AnalysisRequest};
pub use runner::AnalysisRunner;
