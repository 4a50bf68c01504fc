//! Configuration schema for the tagline service.

use serde::{Deserialize, Serialize};

/// Root config for the tagline service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaglineConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

/// SQLite store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file path, relative to the process cwd when not absolute.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "taglines.db".to_string()
}

/// Supported text-completion backends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions endpoint.
    #[default]
    OpenAi,
    /// Hugging Face inference API.
    HuggingFace,
}

/// Upstream text-completion provider configuration.
///
/// Unset fields fall back to per-provider defaults, see the accessor methods.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Request timeout; no timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Model name, defaulting per provider.
    pub fn model_name(&self) -> &str {
        match (&self.model, self.kind) {
            (Some(model), _) => model,
            (None, ProviderKind::OpenAi) => "gpt-3.5-turbo",
            (None, ProviderKind::HuggingFace) => "openai-community/gpt2",
        }
    }

    /// Base URL without a trailing slash, defaulting per provider.
    pub fn base_url(&self) -> &str {
        match (&self.base_url, self.kind) {
            (Some(url), _) => url.trim_end_matches('/'),
            (None, ProviderKind::OpenAi) => "https://api.openai.com/v1",
            (None, ProviderKind::HuggingFace) => "https://api-inference.huggingface.co",
        }
    }

    /// Environment variable consulted for the API key.
    pub fn api_key_env(&self) -> &str {
        match (&self.api_key_env, self.kind) {
            (Some(name), _) => name,
            (None, ProviderKind::OpenAi) => "OPENAI_API_KEY",
            (None, ProviderKind::HuggingFace) => "HF_API_KEY",
        }
    }
}

/// Tuning for how completions are turned into taglines.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    /// Strip leading list markers such as `-`, `•` or `1.` from each line.
    #[serde(default)]
    pub strip_list_markers: bool,
}
