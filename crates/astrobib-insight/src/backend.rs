//! Summarization backend trait and the HuggingFace BART implementation.
//!
//! The remote contract: request `{inputs, parameters: {max_length,
//! min_length, do_sample}}`; response either `{"summary_text": ...}`
//! (optionally wrapped in a single-element list) or `{"error": ...}`.
//! An error message mentioning "loading" means the hosted model is still
//! warming up and the caller may simply retry.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Transient: the hosted model is still initializing.
    #[error("model warming up: {0}")]
    ModelLoading(String),
    #[error("API error: {0}")]
    Api(String),
}

/// Seam for the remote summarization call, so the responder can be tested
/// against fakes that fail, stall, or echo.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError>;
}

/// HuggingFace hosted-inference BART summarizer.
pub struct BartSummarizer {
    endpoint: String,
    api_token: Option<SecretString>,
    max_length: u32,
    min_length: u32,
    client: reqwest::Client,
}

impl BartSummarizer {
    pub fn new(endpoint: impl Into<String>, api_token: Option<SecretString>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token,
            max_length: 300,
            min_length: 100,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_length_bounds(mut self, min_length: u32, max_length: u32) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }
}

#[async_trait]
impl Summarizer for BartSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError> {
        let body = serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_length": self.max_length,
                "min_length": self.min_length,
                "do_sample": false,
            }
        });
        let resp = self.auth(self.client.post(&self.endpoint)).json(&body).send().await?;
        let status = resp.status();
        let json: Value = resp.json().await?;

        // The structured error field outranks the HTTP status: a warming-up
        // model answers 503 with {"error": "... currently loading ..."}.
        if let Some(message) = json["error"].as_str() {
            if message.contains("loading") {
                return Err(SummarizerError::ModelLoading(message.to_string()));
            }
            return Err(SummarizerError::Api(message.to_string()));
        }
        if !status.is_success() {
            return Err(SummarizerError::Api(format!("unexpected status {status}")));
        }

        Ok(extract_summary(&json))
    }
}

/// Pull `summary_text` out of a success response. The hosted API wraps the
/// object in a single-element list; a bare object is accepted too, and a
/// response with neither falls back to a generic acknowledgement.
fn extract_summary(json: &Value) -> String {
    json.as_array()
        .and_then(|items| items.first())
        .and_then(|item| item["summary_text"].as_str())
        .or_else(|| json["summary_text"].as_str())
        .unwrap_or("Analysis complete")
        .to_string()
}
