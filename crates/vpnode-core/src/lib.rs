//! vpnode-core: Core library for managing the configuration of a VPN node
//!
//! This library owns the configuration lifecycle of a node home directory:
//! creating the default `config.toml`, loading and rendering it, and
//! overriding a single key by dotted path. It is used by the `vpnode` CLI.
//!
//! # Main Entry Points
//!
//! - [`config`] - Configuration model, file codec and store operations
//! - [`errors`] - Shared error trait
//! - [`logging`] - Tracing subscriber setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::{CONFIG_FILE_NAME, ConfigError, NodeConfig};

// Re-export handler module as the primary API
pub use config::handler as config_ops;

// Re-export logging initialization
pub use logging::init_logging;
