//! Configuration for the processing pipeline and the analysis collaborator.
//!
//! Credentials are injected here at startup and scoped to the client that
//! needs them; nothing is ever written to process-global state.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the analysis service API key.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the analysis service base URL.
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the analysis model.
pub const ENV_MODEL: &str = "OPENAI_MODEL";

/// What to do with a record missing a required field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Keep the record, judge it UNKNOWN, surface the error on the row.
    #[default]
    MarkUnknown,
    /// Drop the record from the output (logged, not silent).
    Skip,
    /// Abort the whole batch.
    Fail,
}

/// Settings for the external analysis collaborator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// API key, held by the client only
    pub api_key: String,
    /// Service base URL
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-call timeout; a timeout is treated as service-unavailable
    pub timeout: Duration,
    /// Maximum analysis calls in flight at once
    pub max_concurrency: usize,
}

impl AnalysisConfig {
    /// Create a config with the default service endpoint and model.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            temperature: 0.3,
            timeout: Duration::from_secs(30),
            max_concurrency: 4,
        }
    }

    /// Build from the environment at startup.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::Config(format!("{ENV_API_KEY} is not set")))?;
        let mut config = Self::new(&api_key);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var(ENV_MODEL) {
            config.model = model;
        }
        Ok(config)
    }

    /// Set the model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker-pool size.
    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}

/// Top-level pipeline configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Policy for records missing required fields
    pub missing_field_policy: MissingFieldPolicy,
    /// Collaborator settings; `None` disables the analysis pass
    pub analysis: Option<AnalysisConfig>,
}

impl PipelineConfig {
    /// Default config: mark-unknown policy, no analysis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-field policy.
    pub fn with_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_field_policy = policy;
        self
    }

    /// Enable the analysis pass.
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = Some(analysis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::new("sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrency, 4);
    }

    #[test]
    fn test_analysis_config_builders() {
        let config = AnalysisConfig::new("sk-test")
            .with_model("gpt-4o-mini")
            .with_timeout(Duration::from_secs(5))
            .with_concurrency(0);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout, Duration::from_secs(5));
        // Concurrency is clamped to at least one worker.
        assert_eq!(config.max_concurrency, 1);
    }

    #[test]
    fn test_pipeline_config_defaults() {
        let config = PipelineConfig::new();
        assert_eq!(config.missing_field_policy, MissingFieldPolicy::MarkUnknown);
        assert!(config.analysis.is_none());
    }
}
