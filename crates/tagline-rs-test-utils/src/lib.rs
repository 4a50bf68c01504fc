//! Test helpers shared across tagline-rs crates.

pub mod provider;
pub mod store;

pub use provider::{FailingProvider, FixedProvider, RecordingProvider};
pub use store::{FailingStore, in_memory_store};
