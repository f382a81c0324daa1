//! Default implementations for configuration types.
//!
//! Every field has a fixed default so that a freshly initialized home is
//! always structurally valid, and so that a partial file decodes.

use crate::config::types::{
    ChainConfig, HandshakeConfig, KeyringConfig, NodeConfig, NodeSettings, QosConfig,
};

/// Default TCP port of the node API.
pub const DEFAULT_LISTEN_PORT: u16 = 7777;

/// Default chain the node registers on.
pub const DEFAULT_CHAIN_ID: &str = "sentinelhub-2";

impl NodeConfig {
    /// Build a configuration populated with the fixed default of every field.
    pub fn with_default_values() -> Self {
        Self::default()
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            gas: 200_000,
            gas_adjustment: 1.05,
            gas_prices: "0.1udvpn".to_string(),
            id: DEFAULT_CHAIN_ID.to_string(),
            rpc_addresses: "https://rpc.sentinel.co:443".to_string(),
            rpc_query_timeout: 10,
            rpc_tx_timeout: 30,
            simulate_and_execute: true,
        }
    }
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            enable: false,
            peers: 8,
        }
    }
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            from: String::new(),
        }
    }
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            interval_set_sessions: "10s".to_string(),
            interval_update_sessions: "1h55m".to_string(),
            interval_update_status: "55m".to_string(),
            ipv4_address: String::new(),
            listen_port: DEFAULT_LISTEN_PORT,
            moniker: String::new(),
            gigabyte_prices: "15342624udvpn".to_string(),
            hourly_prices: "4160000udvpn".to_string(),
            remote_url: String::new(),
            node_type: "wireguard".to_string(),
        }
    }
}

impl Default for QosConfig {
    fn default() -> Self {
        Self { max_peers: 250 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_default_values_is_deterministic() {
        assert_eq!(NodeConfig::with_default_values(), NodeConfig::with_default_values());
    }

    #[test]
    fn test_chain_defaults() {
        let chain = ChainConfig::default();
        assert_eq!(chain.gas, 200_000);
        assert_eq!(chain.gas_adjustment, 1.05);
        assert_eq!(chain.id, "sentinelhub-2");
        assert!(chain.simulate_and_execute);
    }

    #[test]
    fn test_node_defaults() {
        let node = NodeSettings::default();
        assert_eq!(node.listen_port, 7777);
        assert_eq!(node.node_type, "wireguard");
        assert!(node.moniker.is_empty());
    }

    #[test]
    fn test_handshake_disabled_by_default() {
        let handshake = HandshakeConfig::default();
        assert!(!handshake.enable);
        assert_eq!(handshake.peers, 8);
    }

    #[test]
    fn test_default_config_serializes() {
        let toml_str = toml::to_string_pretty(&NodeConfig::with_default_values());
        assert!(toml_str.is_ok());
    }
}
