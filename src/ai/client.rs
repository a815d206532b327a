//! LLM (`OpenAI`) API client module
//!
//! Encapsulates all LLM API interactions for generating summary text.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::generator::TextGenerator;
use crate::core::config::AppConfig;
use crate::errors::SimplifyError;

const TOKEN_BUFFER: usize = 250;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summary text
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
    temperature: f32,
    max_output_tokens: usize,
    context_tokens: usize,
}

impl LlmClient {
    /// Builds the client and its shared HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SimplifyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                SimplifyError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key: config.openai_api_key.clone(),
            org_id: config.openai_org_id.clone(),
            model_name: config.model_name(),
            base_url: config.base_url(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            context_tokens: config.context_tokens,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn build_prompt(&self, text: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(text.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }

    /// # Errors
    ///
    /// Returns an error if the prompt does not fit the context window, the
    /// HTTP request fails, or the response carries no output text.
    pub async fn generate_text(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SimplifyError> {
        #[cfg(feature = "debug-logs")]
        info!("Using prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            "Estimated input tokens: {}", estimated_input_tokens
        );

        let required = estimated_input_tokens
            .saturating_add(self.max_output_tokens)
            .saturating_add(TOKEN_BUFFER);
        if required > self.context_tokens {
            return Err(SimplifyError::OpenAIError(format!(
                "Prompt too large: ~{estimated_input_tokens} input tokens plus {} output tokens exceeds the {} token context window",
                self.max_output_tokens, self.context_tokens
            )));
        }

        let request_body = json!({
            "model": self.model_name,
            "input": build_responses_input_from_prompt(&prompt),
            "max_output_tokens": self.max_output_tokens,
            "temperature": self.temperature
        });

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SimplifyError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SimplifyError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SimplifyError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = self
            .http
            .post(format!("{}/responses", self.base_url))
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SimplifyError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SimplifyError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SimplifyError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_output_text(&response_json)
            .ok_or_else(|| SimplifyError::OpenAIError("No text in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, SimplifyError> {
        self.generate_text(self.build_prompt(prompt)).await
    }
}

/// Pulls the generated text out of a Responses API payload.
///
/// Prefers the aggregated `output_text` field; otherwise joins every
/// `output_text` content part in order.
#[must_use]
pub fn extract_output_text(response_json: &Value) -> Option<String> {
    if let Some(text) = response_json.get("output_text").and_then(|v| v.as_str()) {
        return Some(text.to_string());
    }

    let mut collected: Vec<String> = Vec::new();
    let items = response_json.get("output").and_then(|o| o.as_array())?;
    for item in items {
        let Some(parts) = item.get("content").and_then(|c| c.as_array()) else {
            continue;
        };
        for p in parts {
            let is_output_text = p
                .get("type")
                .and_then(|t| t.as_str())
                .is_some_and(|t| t == "output_text");
            if !is_output_text {
                continue;
            }
            if let Some(s) = p.get("text").and_then(|t| t.as_str()) {
                collected.push(s.to_string());
            } else if let Some(s) = p
                .get("text")
                .and_then(|t| t.get("value"))
                .and_then(|v| v.as_str())
            {
                collected.push(s.to_string());
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

pub(crate) fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter(|m| !matches!(m.role, MessageRole::assistant))
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            let parts: Vec<Value> = match &m.content {
                Content::Text(t) => vec![json!({
                    "type": "input_text",
                    "text": t
                })],
                // Documents are text-only
                Content::ImageUrl(_) => Vec::new(),
            };

            json!({
                "role": role_str,
                "content": parts
            })
        })
        .collect()
}
