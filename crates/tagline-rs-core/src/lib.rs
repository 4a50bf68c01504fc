//! Core tagline generation for the tagline service.
//!
//! This crate owns prompt assembly, the completion providers, completion
//! parsing and the service that ties them to a tagline store.

pub mod error;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod service;

pub use error::{GenerateError, HistoryError, ProviderError, SetupError};
pub use parse::parse_taglines;
pub use prompt::build_prompt;
/// Completion provider interface and HTTP implementations.
pub use provider::{
    CompletionProvider, HuggingFaceProvider, OpenAiProvider, build_http_client,
    provider_from_config,
};
pub use service::TaglineService;
