//! HTTP client for the text-generation analysis service.

use crate::analysis::provider::{AnalysisProvider, AnalysisRequest};
use crate::config::AnalysisConfig;
use crate::core::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Chat-completions client.
///
/// The API key lives inside this client only; it is injected through
/// [`AnalysisConfig`] at construction and never stored globally.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: AnalysisConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiClient {
    /// Create a client from injected configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        let prompt = request.prompt();
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedAnalysis(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::MalformedAnalysis("response carried no choices".to_string()))
    }
}
