//! Public SDK surface for the tagline service.
//!
//! This crate re-exports the building blocks and provides the setup helpers
//! shared by the `tagline` binary and embedders.

/// Re-export for convenience.
pub use tagline_rs_config as config;
pub use tagline_rs_core as core;
/// Re-export for convenience.
pub use tagline_rs_protocol as protocol;
pub use tagline_rs_server as server;
/// Re-export for convenience.
pub use tagline_rs_store as store;

use std::path::Path;
use tagline_rs_config::{ConfigError, LayeredConfigOptions, TaglineConfig};

#[inline]
/// Initialize env_logger with millisecond timestamps.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `server.bind`.
    pub bind: Option<String>,
    /// Replaces `store.path`.
    pub db: Option<String>,
}

/// Load the layered config for `cwd`, with `runtime` applied as the top layer,
/// then apply overrides and re-validate.
pub fn load_config(
    cwd: &Path,
    runtime: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<TaglineConfig, ConfigError> {
    let mut options = LayeredConfigOptions::new(cwd);
    if let Some(path) = runtime {
        options = options.with_runtime_path(path);
    }
    let layered = TaglineConfig::load_layered_with_options(options)?;
    log::debug!("layered config loaded (layers={})", layered.layers.len());
    let mut config = layered.config;
    if let Some(bind) = &overrides.bind {
        config.server.bind = bind.clone();
    }
    if let Some(db) = &overrides.db {
        config.store.path = db.clone();
    }
    config.validate()?;
    Ok(config)
}
