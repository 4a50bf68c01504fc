//! Finding and reading `tagline.json5` layers on disk.

use super::{
    ConfigLayer, ConfigLayerSource, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE, LayeredConfigOptions,
    LoadedLayer, schema,
};
use crate::ConfigError;
use directories::UserDirs;
use log::debug;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// `~/.tagline/tagline.json5`, when a home directory is known.
pub(super) fn user_config_path() -> Option<PathBuf> {
    let dirs = UserDirs::new()?;
    Some(
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE),
    )
}

/// Optional layers that exist on disk, lowest precedence first.
///
/// A file reachable through more than one location (cwd is the project
/// root, for instance) is only returned once, at its first position.
pub(super) fn discover_layers(
    options: &LayeredConfigOptions,
) -> Result<Vec<(ConfigLayerSource, PathBuf)>, ConfigError> {
    let cwd = match options.cwd.canonicalize() {
        Ok(path) => path,
        Err(err) if err.kind() == ErrorKind::NotFound => options.cwd.clone(),
        Err(err) => return Err(ConfigError::ReadFailed(err)),
    };

    let mut candidates = Vec::with_capacity(3);
    if let Some(path) = &options.user_config_path {
        candidates.push((ConfigLayerSource::User, path.clone()));
    }
    let project_root = cwd.ancestors().find(|dir| {
        options
            .project_root_markers
            .iter()
            .any(|marker| dir.join(marker).exists())
    });
    match project_root {
        Some(root) => candidates.push((ConfigLayerSource::Project, root.join(DEFAULT_CONFIG_FILE))),
        None => debug!("no project root above {}", cwd.display()),
    }
    candidates.push((ConfigLayerSource::Cwd, cwd.join(DEFAULT_CONFIG_FILE)));

    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for (source, path) in candidates {
        let Ok(key) = path.canonicalize() else {
            debug!("no {} layer at {}", source.as_str(), path.display());
            continue;
        };
        if seen.insert(key) {
            found.push((source, path));
        } else {
            debug!("{} layer already loaded ({})", source.as_str(), path.display());
        }
    }
    Ok(found)
}

/// Read, parse and schema-check one layer.
pub(super) fn read_layer(source: ConfigLayerSource, path: &Path) -> Result<LoadedLayer, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound && source == ConfigLayerSource::Runtime => {
            return Err(ConfigError::MissingLayer {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    let value: Value = json5::from_str(&contents)?;
    schema::validate_layer_schema(&value, &format!("{}({})", source.as_str(), path.display()))?;
    debug!(
        "read {} layer (path={}, bytes={})",
        source.as_str(),
        path.display(),
        contents.len()
    );
    Ok(LoadedLayer {
        meta: ConfigLayer {
            source,
            path: path.to_path_buf(),
        },
        value,
    })
}
