//! Tests for layered configuration loading.

use super::*;
use crate::ProviderKind;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write JSON5 contents to a path, creating parent directories if needed.
fn write_json5(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Options rooted in a temp dir so the real home directory is never read.
fn isolated_options(cwd: &Path, user_config: Option<PathBuf>) -> LayeredConfigOptions {
    LayeredConfigOptions {
        user_config_path: user_config,
        ..LayeredConfigOptions::new(cwd)
    }
}

/// Verify that a minimal config parses with defaults.
#[test]
fn parse_minimal_config() {
    let config = TaglineConfig::load_from_str("{}").expect("config");
    assert_eq!(config.server.bind, "127.0.0.1:5000");
    assert_eq!(config.store.path, "taglines.db");
    assert_eq!(config.provider.kind, ProviderKind::OpenAi);
    assert_eq!(config.provider.model_name(), "gpt-3.5-turbo");
    assert_eq!(config.provider.api_key_env(), "OPENAI_API_KEY");
    assert!(!config.generation.strip_list_markers);
}

/// Provider defaults follow the selected backend.
#[test]
fn huggingface_defaults_apply() {
    let config = TaglineConfig::load_from_str(
        r#"{ provider: { kind: "huggingface", base_url: "http://localhost:9000/" } }"#,
    )
    .expect("config");
    assert_eq!(config.provider.model_name(), "openai-community/gpt2");
    assert_eq!(config.provider.api_key_env(), "HF_API_KEY");
    assert_eq!(config.provider.base_url(), "http://localhost:9000");
}

/// Reject unexpected top-level config keys.
#[test]
fn rejects_unknown_top_level_key() {
    let err = TaglineConfig::load_from_str(r#"{ unexpected: true }"#).unwrap_err();
    assert!(format!("{err}").contains("unknown key"));
}

/// Reject nested typos with the full path.
#[test]
fn rejects_unknown_nested_key() {
    let err = TaglineConfig::load_from_str(r#"{ provider: { modle: "x" } }"#).unwrap_err();
    assert!(format!("{err}").contains("provider.modle"));
}

/// Reject unsupported provider kinds.
#[test]
fn rejects_invalid_provider_kind() {
    let err = TaglineConfig::load_from_str(r#"{ provider: { kind: "bard" } }"#).unwrap_err();
    assert!(format!("{err}").contains("provider.kind"));
}

/// Reject a zero timeout that would fail every request.
#[test]
fn rejects_zero_timeout() {
    let err = TaglineConfig::load_from_str(r#"{ provider: { timeout_secs: 0 } }"#).unwrap_err();
    assert!(format!("{err}").contains("provider.timeout_secs"));
}

/// Cwd config overrides user config, runtime overrides both.
#[test]
fn layered_config_applies_precedence() {
    let temp = TempDir::new().expect("tmp");
    let root = temp.path();
    let cwd = root.join("work");
    fs::create_dir_all(&cwd).expect("cwd");

    let user_config = root.join("home").join(DEFAULT_CONFIG_FILE);
    write_json5(
        &user_config,
        r#"{ server: { bind: "0.0.0.0:1" }, store: { path: "user.db" } }"#,
    );
    write_json5(
        &cwd.join(DEFAULT_CONFIG_FILE),
        r#"{ store: { path: "cwd.db" } }"#,
    );
    let runtime = root.join("runtime.json5");
    write_json5(&runtime, r#"{ generation: { strip_list_markers: true } }"#);

    let options = isolated_options(&cwd, Some(user_config)).with_runtime_path(&runtime);
    let layered = TaglineConfig::load_layered_with_options(options).expect("layered");

    assert_eq!(layered.config.server.bind, "0.0.0.0:1");
    assert_eq!(layered.config.store.path, "cwd.db");
    assert!(layered.config.generation.strip_list_markers);
    let sources: Vec<_> = layered.layers.iter().map(|layer| layer.source).collect();
    assert_eq!(
        sources,
        vec![
            ConfigLayerSource::User,
            ConfigLayerSource::Cwd,
            ConfigLayerSource::Runtime
        ]
    );
}

/// A project root that is also the cwd contributes a single layer.
#[test]
fn layered_config_deduplicates_project_and_cwd() {
    let temp = TempDir::new().expect("tmp");
    let project = temp.path().join("project");
    fs::create_dir_all(project.join(".git")).expect("git");
    write_json5(
        &project.join(DEFAULT_CONFIG_FILE),
        r#"{ provider: { model: "gpt-4o-mini" } }"#,
    );

    let layered =
        TaglineConfig::load_layered_with_options(isolated_options(&project, None)).expect("load");
    assert_eq!(layered.layers.len(), 1);
    assert_eq!(layered.layers[0].source, ConfigLayerSource::Project);
    assert_eq!(layered.config.provider.model_name(), "gpt-4o-mini");
}

/// Missing runtime layers are an error rather than silently skipped.
#[test]
fn layered_config_requires_runtime_paths() {
    let temp = TempDir::new().expect("tmp");
    let options =
        isolated_options(temp.path(), None).with_runtime_path(temp.path().join("missing.json5"));
    let err = TaglineConfig::load_layered_with_options(options).unwrap_err();
    assert!(matches!(err, ConfigError::MissingLayer { .. }));
}

/// Invalid layers name their origin in the error.
#[test]
fn layered_config_reports_layer_label() {
    let temp = TempDir::new().expect("tmp");
    write_json5(
        &temp.path().join(DEFAULT_CONFIG_FILE),
        r#"{ store: { path: 42 } }"#,
    );
    let err =
        TaglineConfig::load_layered_with_options(isolated_options(temp.path(), None)).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("cwd("));
    assert!(msg.contains("store.path"));
}
