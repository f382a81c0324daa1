//! Config store operations: init, show, set.
//!
//! Every operation takes the node home directory explicitly and touches at
//! most the single `config.toml` inside it.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::errors::ConfigError;
use crate::config::types::NodeConfig;
use crate::config::{config_file_path, overrides, persistence};

fn create_home_dir(home: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(home)
}

/// Write the default configuration to `<home>/config.toml`.
///
/// Creates `home` (owner-only on unix) if it does not exist. Returns the path
/// of the written file.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` if the file exists and `force` is
/// false; the existing file is left untouched. Returns `ConfigError::Io` if
/// the directory or file cannot be written.
pub fn init_config(home: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let path = config_file_path(home);
    info!(
        event = "core.config.init_started",
        path = %path.display(),
        force = force
    );

    if !force && path.exists() {
        error!(
            event = "core.config.init_failed",
            path = %path.display(),
            reason = "already_exists"
        );
        return Err(ConfigError::AlreadyExists { path });
    }

    create_home_dir(home).map_err(|e| {
        error!(
            event = "core.config.init_failed",
            home = %home.display(),
            error = %e
        );
        ConfigError::io(home, e)
    })?;

    let config = NodeConfig::with_default_values();
    persistence::save_config(&config, &path)?;

    info!(event = "core.config.init_completed", path = %path.display());
    Ok(path)
}

/// Load the configuration stored in `home`.
///
/// # Errors
///
/// Propagates `NotFound`, `Decode` and `Io` from the codec unchanged.
pub fn get_config(home: &Path) -> Result<NodeConfig, ConfigError> {
    let path = config_file_path(home);
    persistence::load_config(&path).inspect_err(|e| {
        error!(
            event = "core.config.load_failed",
            path = %path.display(),
            error = %e
        );
    })
}

/// Load the configuration stored in `home` and render it for display.
///
/// # Errors
///
/// Same as [`get_config`].
pub fn show_config(home: &Path) -> Result<String, ConfigError> {
    let config = get_config(home)?;
    Ok(config.to_string())
}

/// Override a single dotted `key` with `value` and persist the result.
///
/// The override is applied to the table read from disk, then decoded into
/// the typed model; an unknown key or an incompatible value fails that
/// decode. Nothing is written unless every step succeeds.
///
/// # Errors
///
/// Propagates load errors unchanged. Returns `ConfigError::InvalidKey` for
/// a malformed key and `ConfigError::Decode` for an unknown key or a value
/// of the wrong type. Returns `ConfigError::Io` if saving fails.
pub fn set_config(home: &Path, key: &str, value: &str) -> Result<NodeConfig, ConfigError> {
    let path = config_file_path(home);
    info!(
        event = "core.config.set_started",
        path = %path.display(),
        key = key
    );

    let result = persistence::load_table(&path).and_then(|mut table| {
        overrides::apply_override(&mut table, key, value, &overrides::schema_table())?;
        let config = persistence::decode_table(table, &path)?;
        persistence::save_config(&config, &path)?;
        Ok(config)
    });

    match result {
        Ok(config) => {
            info!(
                event = "core.config.set_completed",
                path = %path.display(),
                key = key
            );
            Ok(config)
        }
        Err(e) => {
            error!(
                event = "core.config.set_failed",
                path = %path.display(),
                key = key,
                error_code = crate::errors::NodeError::error_code(&e),
                error = %e
            );
            Err(e)
        }
    }
}
