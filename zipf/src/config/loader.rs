// src/config/loader.rs
use std::collections::HashSet;
use std::fs;
use std::path::{self, Path, PathBuf};

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::ZipfError;

pub const CONFIG_FILE_NAME: &str = ".zipf.toml";

/// Looks for a `.zipf.toml` in `dir`, then in each of its parents.
///
/// A relative `dir` is resolved against the working directory first, so the
/// search still reaches its ancestors. Returns the first file found, or
/// `None` once the root has been checked.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return Some(config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads and validates a single config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or has unknown keys
/// * A value is out of range
pub fn load_config_file(path: &Path) -> Result<ReportConfig, ZipfError> {
    let content = fs::read_to_string(path).map_err(|source| ZipfError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ReportConfig = toml::from_str(&content).map_err(|source| ZipfError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Resolves the report config for an input living in `dir`.
///
/// An explicit file wins; otherwise the nearest `.zipf.toml` is used, and
/// failing that the defaults.
///
/// # Errors
///
/// Propagates any error from [`load_config_file`].
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ReportConfig, ZipfError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    match find_config_file(dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ReportConfig::default()),
    }
}
