//! Dotted-path overrides on a raw TOML table.
//!
//! `config set node.listen_port 8585` is applied to the table read from
//! disk, not to a fresh default model, so every other persisted value stays
//! as it was. The incoming string is coerced to the type the schema declares
//! for that path. Whether the key exists at all is left to the typed decode
//! that follows (`deny_unknown_fields`), so there is no separate allowlist.
//!
//! Keys are matched case-insensitively (every schema key is lowercase).
//! Booleans accept `1/0`, `t/f` and `true/false` in lower, upper or title
//! case. Integers accept an optional sign and a `0x`, `0o` or `0b` prefix;
//! a bare leading `0` means octal.

use crate::config::errors::ConfigError;
use crate::config::types::NodeConfig;

/// The default model as a TOML table, used to look up declared value types.
pub fn schema_table() -> toml::Table {
    match toml::Value::try_from(NodeConfig::with_default_values()) {
        Ok(toml::Value::Table(table)) => table,
        Ok(_) | Err(_) => {
            tracing::warn!(
                event = "core.config.schema_unavailable",
                "Default config did not serialize to a table, values will be set as strings"
            );
            toml::Table::new()
        }
    }
}

/// Split a dotted key into lowercase path segments.
///
/// # Errors
///
/// Returns `ConfigError::InvalidKey` for an empty key or an empty segment
/// (`node..port`, `.node`, `node.`).
pub fn parse_key(key: &str) -> Result<Vec<String>, ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            message: "key must not be empty".to_string(),
        });
    }

    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            message: "key contains an empty path segment".to_string(),
        });
    }

    Ok(segments
        .iter()
        .map(|segment| segment.trim().to_ascii_lowercase())
        .collect())
}

fn declared_value<'a>(schema: &'a toml::Table, segments: &[String]) -> Option<&'a toml::Value> {
    let (leaf, parents) = segments.split_last()?;
    let mut current = schema;
    for segment in parents {
        current = current.get(segment.as_str())?.as_table()?;
    }
    current.get(leaf.as_str())
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    // from_str_radix would accept a second sign
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Convert a raw CLI string into the TOML value type declared by the schema.
///
/// Falls back to a string when the path is not declared or the text does not
/// parse as the declared type; the typed decode then reports the mismatch.
pub fn coerce_value(raw: &str, declared: Option<&toml::Value>) -> toml::Value {
    let text = raw.trim();
    let parsed = match declared {
        Some(toml::Value::Integer(_)) => parse_integer(text).map(toml::Value::Integer),
        Some(toml::Value::Float(_)) => text.parse::<f64>().ok().map(toml::Value::Float),
        Some(toml::Value::Boolean(_)) => parse_bool(text).map(toml::Value::Boolean),
        _ => None,
    };

    parsed.unwrap_or_else(|| toml::Value::String(raw.to_string()))
}

/// Set `key` to `raw` inside `table`, creating intermediate tables that a
/// partial file does not contain yet.
///
/// # Errors
///
/// Returns `ConfigError::InvalidKey` if the key is malformed or a parent
/// segment already holds a non-table value.
pub fn apply_override(
    table: &mut toml::Table,
    key: &str,
    raw: &str,
    schema: &toml::Table,
) -> Result<(), ConfigError> {
    let segments = parse_key(key)?;
    let value = coerce_value(raw, declared_value(schema, &segments));

    let Some((leaf, parents)) = segments.split_last() else {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            message: "key must not be empty".to_string(),
        });
    };

    let mut current = table;
    for segment in parents {
        let entry = current
            .entry(segment.as_str())
            .or_insert(toml::Value::Table(toml::Table::new()));
        current = match entry {
            toml::Value::Table(inner) => inner,
            other => {
                return Err(ConfigError::InvalidKey {
                    key: key.to_string(),
                    message: format!("'{}' holds a {}, not a table", segment, other.type_str()),
                });
            }
        };
    }

    current.insert(leaf.clone(), value);
    Ok(())
}
