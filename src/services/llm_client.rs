//! Chat-completion client for the explanation model.
//!
//! Groq exposes an OpenAI-compatible API, so the same client works against OpenAI or any
//! local proxy that speaks `/chat/completions`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Errors from LLM provider calls.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("response parse error: {0}")]
    Parse(String),
    #[error("empty response from LLM")]
    EmptyResponse,
}

/// A completed LLM response.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The text content of the response.
    pub text: String,
    /// Input tokens used (from API response, if reported).
    pub input_tokens: Option<u64>,
    /// Output tokens used (from API response, if reported).
    pub output_tokens: Option<u64>,
}

/// Sampling parameters sent with every completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: GroqClient::DEFAULT_MODEL.to_string(),
            temperature: 0.6,
            max_tokens: 2048,
        }
    }
}

/// Abstraction over LLM API providers.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a single user message and return the completion.
    async fn complete(&self, prompt: &str) -> Result<LlmResponse, ProviderError>;

    /// The model name (for display/logging).
    fn model_name(&self) -> &str;
}

/// Groq (OpenAI-compatible) chat-completion client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    api_key: String,
    base_url: String,
    settings: LlmSettings,
    client: Client,
}

impl GroqClient {
    pub const DEFAULT_MODEL: &'static str = "llama-3.3-70b-versatile";
    pub const DEFAULT_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(client, api_key, base_url)
    }

    pub fn with_client(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            settings: LlmSettings::default(),
            client,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: LlmSettings) -> Self {
        self.settings = settings;
        self
    }

    pub const fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    fn request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "model": self.settings.model,
            "temperature": self.settings.temperature,
            "max_tokens": self.settings.max_tokens,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        })
    }
}

/// Pull the text and token usage out of a chat-completion body
pub fn parse_completion(json: &Value) -> Result<LlmResponse, ProviderError> {
    if let Some(err) = json.get("error") {
        return Err(ProviderError::Api {
            status: 400,
            message: error_message(err),
        });
    }

    let text = json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|msg| msg.get("content"))
        .and_then(|c| c.as_str())
        .filter(|c| !c.trim().is_empty())
        .ok_or(ProviderError::EmptyResponse)?
        .to_string();

    let usage = json.get("usage");
    let input_tokens = usage
        .and_then(|u| u.get("prompt_tokens"))
        .and_then(Value::as_u64);
    let output_tokens = usage
        .and_then(|u| u.get("completion_tokens"))
        .and_then(Value::as_u64);

    Ok(LlmResponse {
        text,
        input_tokens,
        output_tokens,
    })
}

fn error_message(err: &Value) -> String {
    err.get("message")
        .and_then(|m| m.as_str())
        .or_else(|| err.as_str())
        .unwrap_or("unknown error")
        .to_string()
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<LlmResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body.get("error").map_or_else(
                || status.canonical_reason().unwrap_or("request failed").to_string(),
                error_message,
            );
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let completion = parse_completion(&json)?;
        tracing::debug!(
            model = %self.settings.model,
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            "completion received"
        );
        Ok(completion)
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}
