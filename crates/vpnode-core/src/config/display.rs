//! Human-readable rendering of a [`NodeConfig`].
//!
//! One `section.key: value` line per field, in declaration order, with a
//! blank line between sections. Keys are the same dotted paths accepted by
//! `config set`.

use std::fmt;

use crate::config::types::NodeConfig;

fn quoted(value: &str) -> String {
    format!("{value:?}")
}

impl NodeConfig {
    /// Ordered `(section, [(dotted key, rendered value)])` groups.
    fn sections(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        let chain = &self.chain;
        let node = &self.node;

        vec![
            (
                "chain",
                vec![
                    ("chain.gas", chain.gas.to_string()),
                    ("chain.gas_adjustment", chain.gas_adjustment.to_string()),
                    ("chain.gas_prices", quoted(&chain.gas_prices)),
                    ("chain.id", quoted(&chain.id)),
                    ("chain.rpc_addresses", quoted(&chain.rpc_addresses)),
                    ("chain.rpc_query_timeout", chain.rpc_query_timeout.to_string()),
                    ("chain.rpc_tx_timeout", chain.rpc_tx_timeout.to_string()),
                    (
                        "chain.simulate_and_execute",
                        chain.simulate_and_execute.to_string(),
                    ),
                ],
            ),
            (
                "handshake",
                vec![
                    ("handshake.enable", self.handshake.enable.to_string()),
                    ("handshake.peers", self.handshake.peers.to_string()),
                ],
            ),
            (
                "keyring",
                vec![
                    ("keyring.backend", quoted(&self.keyring.backend)),
                    ("keyring.from", quoted(&self.keyring.from)),
                ],
            ),
            (
                "node",
                vec![
                    ("node.interval_set_sessions", quoted(&node.interval_set_sessions)),
                    (
                        "node.interval_update_sessions",
                        quoted(&node.interval_update_sessions),
                    ),
                    ("node.interval_update_status", quoted(&node.interval_update_status)),
                    ("node.ipv4_address", quoted(&node.ipv4_address)),
                    ("node.listen_port", node.listen_port.to_string()),
                    ("node.moniker", quoted(&node.moniker)),
                    ("node.gigabyte_prices", quoted(&node.gigabyte_prices)),
                    ("node.hourly_prices", quoted(&node.hourly_prices)),
                    ("node.remote_url", quoted(&node.remote_url)),
                    ("node.type", quoted(&node.node_type)),
                ],
            ),
            (
                "qos",
                vec![("qos.max_peers", self.qos.max_peers.to_string())],
            ),
        ]
    }

    /// All `(dotted key, rendered value)` pairs, in the order they are displayed.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.sections()
            .into_iter()
            .flat_map(|(_, fields)| fields)
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

impl fmt::Display for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (_, fields)) in self.sections().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (key, value) in fields {
                writeln!(f, "{key}: {value}")?;
            }
        }
        Ok(())
    }
}
