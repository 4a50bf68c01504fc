//! Generation and history operations over an injected provider and store.

use crate::error::{GenerateError, HistoryError, ProviderError, SetupError};
use crate::parse::parse_taglines;
use crate::prompt::build_prompt;
use crate::provider::{CompletionProvider, provider_from_config};
use log::{debug, error, info};
use std::sync::Arc;
use tagline_rs_config::{GenerationConfig, TaglineConfig};
use tagline_rs_protocol::{GenerateRequest, TaglineRecord};
use tagline_rs_store::{SqliteTaglineStore, StoreError, TaglineStore};

/// Tagline generation service.
///
/// Owns handles to the completion provider and the store; clones share both.
#[derive(Clone)]
pub struct TaglineService {
    provider: Arc<dyn CompletionProvider>,
    store: Arc<dyn TaglineStore>,
    generation: GenerationConfig,
}

impl TaglineService {
    /// Create a service from explicit dependencies.
    pub fn new(provider: Arc<dyn CompletionProvider>, store: Arc<dyn TaglineStore>) -> Self {
        Self {
            provider,
            store,
            generation: GenerationConfig::default(),
        }
    }

    /// Replace the generation tuning options.
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Wire the configured provider and SQLite store.
    pub fn from_config(config: &TaglineConfig) -> Result<Self, SetupError> {
        let provider = provider_from_config(&config.provider)?;
        let store: Arc<dyn TaglineStore> = Arc::new(SqliteTaglineStore::open(&config.store.path)?);
        Ok(Self::new(provider, store).with_generation(config.generation.clone()))
    }

    /// Generate, persist and return taglines for a request.
    ///
    /// Fails without touching the store when validation or the provider
    /// fails, including a completion with no non-blank lines. The returned taglines are exactly the persisted ones, however
    /// many lines the provider produced.
    pub async fn generate(&self, request: GenerateRequest) -> Result<Vec<String>, GenerateError> {
        request.validate()?;
        let prompt = build_prompt(&request);
        debug!(
            "requesting completion (provider={}, prompt_len={}, count={})",
            self.provider.name(),
            prompt.len(),
            request.count
        );
        let text = self.provider.complete(&prompt).await.map_err(|err| {
            error!("completion failed (provider={}): {err}", self.provider.name());
            err
        })?;
        let taglines = parse_taglines(&text, self.generation.strip_list_markers);
        if taglines.is_empty() {
            error!(
                "completion had no usable lines (provider={}, text_len={})",
                self.provider.name(),
                text.len()
            );
            return Err(ProviderError::MalformedResponse("empty completion".to_string()).into());
        }
        if taglines.len() != request.count as usize {
            debug!(
                "provider returned a different count (requested={}, returned={})",
                request.count,
                taglines.len()
            );
        }

        let metadata = request.metadata();
        let store = Arc::clone(&self.store);
        let to_store = taglines.clone();
        run_blocking(move || store.append(&metadata, &to_store))
            .await
            .map_err(|err| {
                error!("failed to persist taglines: {err}");
                err
            })?;
        info!(
            "taglines generated (name_len={}, tone={}, count={})",
            request.name.len(),
            request.tone,
            taglines.len()
        );
        Ok(taglines)
    }

    /// Every persisted record, newest first.
    pub async fn history(&self) -> Result<Vec<TaglineRecord>, HistoryError> {
        let store = Arc::clone(&self.store);
        let records = run_blocking(move || store.list_history())
            .await
            .map_err(|err| {
                error!("failed to load history: {err}");
                err
            })?;
        debug!("history loaded (records={})", records.len());
        Ok(records)
    }
}

/// Run a synchronous store call on the blocking pool.
async fn run_blocking<T, F>(call: F) -> Result<T, StoreError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|err| StoreError::Worker(err.to_string()))?
}
