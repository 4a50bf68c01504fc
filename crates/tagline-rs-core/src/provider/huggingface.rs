//! Hugging Face inference API provider.

use super::{CompletionProvider, ensure_success};
use crate::error::ProviderError;
use async_trait::async_trait;
use log::debug;
use serde_json::{Value, json};

/// Provider calling `POST {base_url}/models/{model}`.
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HuggingFaceProvider {
    /// Create a provider for the given endpoint and model.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

/// Pull `generated_text` from either `[{..}]` or `{..}` shaped bodies.
fn extract_generated_text(value: &Value) -> Option<String> {
    let entry = match value {
        Value::Array(items) => items.first()?,
        other => other,
    };
    entry
        .get("generated_text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl CompletionProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({ "inputs": prompt });
        let mut request = self.client.post(self.url()).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        debug!(
            "inference request (model={}, prompt_len={})",
            self.model,
            prompt.len()
        );
        let response = ensure_success(request.send().await?).await?;
        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;
        extract_generated_text(&value)
            .ok_or_else(|| ProviderError::MalformedResponse("missing generated_text".to_string()))
    }
}
