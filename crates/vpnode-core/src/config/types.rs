//! Configuration type definitions for a vpnode home.
//!
//! These types are serialized/deserialized from `<home>/config.toml`.
//! Every struct rejects unknown keys, so a misspelled key in the file (or in
//! a `config set` override) surfaces as a decode error instead of being
//! silently dropped. Missing keys fall back to their defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [chain]
//! gas_prices = "0.1udvpn"
//! rpc_addresses = "https://rpc.sentinel.co:443"
//!
//! [handshake]
//! enable = true
//! peers = 8
//!
//! [node]
//! listen_port = 7777
//! remote_url = "https://203.0.113.7:7777"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from the node config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// Blockchain client settings
    pub chain: ChainConfig,

    /// Handshake DNS settings
    pub handshake: HandshakeConfig,

    /// Key storage settings
    pub keyring: KeyringConfig,

    /// Node service settings
    pub node: NodeSettings,

    /// Quality of service limits
    pub qos: QosConfig,
}

/// Blockchain client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    /// Gas limit for transactions.
    pub gas: u64,

    /// Multiplier applied to simulated gas.
    pub gas_adjustment: f64,

    /// Gas prices, e.g. `0.1udvpn`.
    pub gas_prices: String,

    /// Chain identifier.
    pub id: String,

    /// Comma-separated list of RPC endpoints.
    pub rpc_addresses: String,

    /// Timeout in seconds for RPC queries.
    pub rpc_query_timeout: u64,

    /// Timeout in seconds for broadcasting transactions.
    pub rpc_tx_timeout: u64,

    /// Simulate transactions before executing them.
    pub simulate_and_execute: bool,
}

/// Handshake DNS configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandshakeConfig {
    pub enable: bool,
    pub peers: u32,
}

/// Keyring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyringConfig {
    /// Keyring backend: file, os, test.
    pub backend: String,

    /// Name of the key used to sign transactions.
    pub from: String,
}

/// Node service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeSettings {
    /// Interval between session sets, as a duration string (e.g. `10s`).
    pub interval_set_sessions: String,

    /// Interval between on-chain session updates.
    pub interval_update_sessions: String,

    /// Interval between on-chain status updates.
    pub interval_update_status: String,

    /// Public IPv4 address of the node.
    pub ipv4_address: String,

    /// TCP port the node API listens on.
    pub listen_port: u16,

    /// Human-readable node name.
    pub moniker: String,

    /// Per-gigabyte prices, comma separated.
    pub gigabyte_prices: String,

    /// Per-hour prices, comma separated.
    pub hourly_prices: String,

    /// Public URL clients use to reach the node.
    pub remote_url: String,

    /// Tunnel type: wireguard or v2ray.
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Quality of service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QosConfig {
    /// Maximum number of concurrently connected peers.
    pub max_peers: u32,
}
