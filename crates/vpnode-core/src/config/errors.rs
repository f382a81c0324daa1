use std::path::PathBuf;

use crate::errors::NodeError;

/// Note: This type does not implement `Clone` because `io::Error` is not `Clone`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Config file already exists at '{}'. Use --force to overwrite it",
        .path.display()
    )]
    AlreadyExists { path: PathBuf },

    #[error(
        "Config file not found at '{}'. Run 'vpnode config init' first",
        .path.display()
    )]
    NotFound { path: PathBuf },

    #[error("Failed to decode config file '{}': {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Invalid config key '{key}': {message}")]
    InvalidKey { key: String, message: String },

    #[error("IO error accessing config at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error belongs to the decode family (malformed content,
    /// unknown key, or a value of the wrong type).
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ConfigError::Decode { .. } | ConfigError::InvalidKey { .. }
        )
    }
}

impl NodeError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::AlreadyExists { .. } => "CONFIG_ALREADY_EXISTS",
            ConfigError::NotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::Decode { .. } => "CONFIG_DECODE_ERROR",
            ConfigError::InvalidKey { .. } => "CONFIG_INVALID_KEY",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            ConfigError::AlreadyExists { .. }
            | ConfigError::NotFound { .. }
            | ConfigError::Decode { .. }
            | ConfigError::InvalidKey { .. } => true,

            ConfigError::Io { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let error = ConfigError::AlreadyExists {
            path: PathBuf::from("/tmp/node/config.toml"),
        };
        assert_eq!(
            error.to_string(),
            "Config file already exists at '/tmp/node/config.toml'. Use --force to overwrite it"
        );
        assert_eq!(error.error_code(), "CONFIG_ALREADY_EXISTS");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_found_names_path() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/tmp/node/config.toml"),
        };
        assert!(error.to_string().contains("/tmp/node/config.toml"));
        assert_eq!(error.error_code(), "CONFIG_NOT_FOUND");
        assert!(error.is_user_error());
        assert!(!error.is_decode_error());
    }

    #[test]
    fn test_decode_error_display() {
        let error = ConfigError::Decode {
            path: PathBuf::from("config.toml"),
            message: "unknown field `foo`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to decode config file 'config.toml': unknown field `foo`"
        );
        assert_eq!(error.error_code(), "CONFIG_DECODE_ERROR");
        assert!(error.is_decode_error());
    }

    #[test]
    fn test_invalid_key_is_decode_family() {
        let error = ConfigError::InvalidKey {
            key: "node..port".to_string(),
            message: "empty path segment".to_string(),
        };
        assert_eq!(error.error_code(), "CONFIG_INVALID_KEY");
        assert!(error.is_decode_error());
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let error = ConfigError::io(
            "/root/config.toml",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(error.to_string().contains("/root/config.toml"));
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
        assert!(std::error::Error::source(&error).is_some());
    }
}
