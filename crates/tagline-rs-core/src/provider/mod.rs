//! Text-completion providers used to generate taglines.

mod huggingface;
mod openai;

pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;

use crate::error::ProviderError;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use tagline_rs_config::{ProviderConfig, ProviderKind};

/// Opaque text-completion capability.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Complete a single prompt, returning the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Build the provider selected by config.
///
/// The API key is read from the configured environment variable; when it is
/// unset requests are sent without credentials and the upstream decides.
pub fn provider_from_config(
    config: &ProviderConfig,
) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
    let client = build_http_client(config.timeout_secs)?;
    let api_key_env = config.api_key_env();
    let api_key = std::env::var(api_key_env).ok().filter(|key| !key.trim().is_empty());
    if api_key.is_none() {
        warn!("no api key found (env={api_key_env}); sending unauthenticated requests");
    }
    info!(
        "building completion provider (kind={:?}, model={}, base_url={})",
        config.kind,
        config.model_name(),
        config.base_url()
    );
    let provider: Arc<dyn CompletionProvider> = match config.kind {
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
            client,
            config.base_url(),
            config.model_name(),
            api_key,
        )),
        ProviderKind::HuggingFace => Arc::new(HuggingFaceProvider::new(
            client,
            config.base_url(),
            config.model_name(),
            api_key,
        )),
    };
    Ok(provider)
}

/// Shared HTTP client; no timeout unless one is configured.
pub fn build_http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client, ProviderError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Turn a non-success response into `ProviderError::Status`, keeping the body.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}
