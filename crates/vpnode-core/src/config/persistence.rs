//! Config file persistence
//!
//! Reads `config.toml` into a [`NodeConfig`] (or its raw TOML table) and
//! writes a [`NodeConfig`] back with an atomic temp-file rename.
//!
//! Limitation: saving re-serializes the typed model, so comments and
//! formatting of a hand-edited file are not preserved. Keys outside the
//! schema are never dropped silently; they fail to decode instead.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::errors::ConfigError;
use crate::config::types::NodeConfig;

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::io(path, e),
    })
}

/// Decode a raw TOML table into the typed model.
pub fn decode_table(table: toml::Table, path: &Path) -> Result<NodeConfig, ConfigError> {
    toml::Value::Table(table)
        .try_into::<NodeConfig>()
        .map_err(|e| ConfigError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load the raw TOML table from a config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::Decode` if it is not valid TOML, and `ConfigError::Io`
/// for any other read failure.
pub fn load_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = read_config_file(path)?;
    content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load and decode a config file.
///
/// # Errors
///
/// Same as [`load_table`], plus `ConfigError::Decode` when the contents do
/// not match the schema (unknown key, wrong value type).
pub fn load_config(path: &Path) -> Result<NodeConfig, ConfigError> {
    let content = read_config_file(path)?;
    let config: NodeConfig = toml::from_str(&content).map_err(|e| {
        tracing::warn!(
            event = "core.config.decode_failed",
            path = %path.display(),
            error = %e
        );
        ConfigError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    tracing::debug!(event = "core.config.loaded", path = %path.display());
    Ok(config)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.config.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}

/// Serialize `config` and atomically replace the file at `path`.
///
/// The parent directory must already exist; this function never creates
/// directories.
///
/// # Errors
///
/// Returns `ConfigError::Io` if serialization, the temp-file write, or the
/// final rename fails. On failure the previous file contents are untouched.
pub fn save_config(config: &NodeConfig, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config).map_err(|e| {
        tracing::error!(
            event = "core.config.serialization_failed",
            path = %path.display(),
            error = %e
        );
        ConfigError::io(path, std::io::Error::new(ErrorKind::InvalidData, e))
    })?;

    let temp_file = temp_path_for(path);

    if let Err(e) = fs::write(&temp_file, &content) {
        // A failed create leaves nothing behind to clean up
        if e.kind() != ErrorKind::NotFound {
            cleanup_temp_file(&temp_file, &e);
        }
        return Err(ConfigError::io(path, e));
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(ConfigError::io(path, e));
    }

    tracing::info!(
        event = "core.config.saved",
        path = %path.display(),
        bytes = content.len()
    );
    Ok(())
}
