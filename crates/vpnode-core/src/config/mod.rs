//! # Configuration System
//!
//! TOML configuration for a VPN node, stored as a single file inside the
//! node home directory.
//!
//! ## File Layout
//!
//! ```toml
//! # <home>/config.toml
//! [chain]
//! id = "sentinelhub-2"
//! gas = 200000
//!
//! [node]
//! listen_port = 7777
//! type = "wireguard"
//!
//! [qos]
//! max_peers = 250
//! ```
//!
//! ## Lifecycle
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vpnode_core::config_ops;
//!
//! fn example() -> Result<(), vpnode_core::ConfigError> {
//!     let home = Path::new("/tmp/node");
//!     config_ops::init_config(home, false)?;
//!     config_ops::set_config(home, "node.listen_port", "8585")?;
//!     println!("{}", config_ops::show_config(home)?);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod display;
pub mod errors;
pub mod handler;
pub mod overrides;
pub mod persistence;
pub mod types;

use std::path::{Path, PathBuf};

// Public API exports
pub use errors::ConfigError;
pub use types::{ChainConfig, HandshakeConfig, KeyringConfig, NodeConfig, NodeSettings, QosConfig};

/// Name of the configuration file inside the node home directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path for a home directory.
pub fn config_file_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}
