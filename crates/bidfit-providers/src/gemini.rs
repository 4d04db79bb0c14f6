//! Gemini chat model client
//!
//! Thin client for the `generateContent` REST endpoint. Structured
//! output uses the API's native JSON mode (`responseMimeType` +
//! `responseSchema`) rather than prompt-side coaxing, so schema
//! conformance is enforced provider-side.

use crate::config::GeminiConfig;
use crate::error::ProviderError;
use crate::model::ChatModel;
use serde_json::{json, Value};

/// Gemini implementation of [`ChatModel`]
pub struct GeminiModel {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiModel {
    /// Create a client from explicit configuration
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;
        Ok(Self { config, client })
    }

    async fn invoke(
        &self,
        instruction: &str,
        generation_config: Option<Value>,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let mut body = json!({
            "contents": [{ "parts": [{ "text": instruction }] }]
        });
        if let Some(cfg) = generation_config {
            body["generationConfig"] = cfg;
        }

        tracing::debug!(model = %self.config.model, "invoking chat model");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        extract_text(&value)
            .map(str::to_string)
            .ok_or(ProviderError::EmptyResponse)
    }
}

/// Pull the first candidate's first text part out of a
/// `generateContent` response
fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

#[async_trait::async_trait]
impl ChatModel for GeminiModel {
    async fn generate(&self, instruction: &str) -> Result<String, ProviderError> {
        self.invoke(instruction, None).await
    }

    async fn generate_structured(
        &self,
        instruction: &str,
        schema: Value,
    ) -> Result<Value, ProviderError> {
        let text = self
            .invoke(
                instruction,
                Some(json!({
                    "responseMimeType": "application/json",
                    "responseSchema": schema,
                })),
            )
            .await?;
        serde_json::from_str(&text).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
