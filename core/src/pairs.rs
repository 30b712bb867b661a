#![deny(missing_docs)]

//! # Key-Value Normalization
//!
//! Maps raw key/value/description triples from any source format into
//! canonical `KeyValuePair`s. Values keep their original JSON shape.

use crate::model::KeyValuePair;
use serde_json::Value;

/// A borrowed view of one source pair.
#[derive(Debug, Clone, Copy)]
pub struct RawPair<'a> {
    /// Pair key.
    pub key: &'a str,
    /// Pair value in any JSON shape.
    pub value: &'a Value,
    /// Pair description.
    pub description: &'a str,
}

/// Converts a single raw pair. The key doubles as the display name.
pub fn normalize_pair(raw: RawPair<'_>) -> KeyValuePair {
    KeyValuePair {
        name: raw.key.to_string(),
        key: raw.key.to_string(),
        value: raw.value.clone(),
        description: raw.description.to_string(),
    }
}

/// Converts pairs in order, keeping everything.
pub fn normalize_pairs<'a, I>(raw: I) -> Vec<KeyValuePair>
where
    I: IntoIterator<Item = RawPair<'a>>,
{
    raw.into_iter().map(normalize_pair).collect()
}

/// Converts pairs in order, dropping any whose key `is_suppressed` accepts.
pub fn normalize_filtered<'a, I, F>(raw: I, is_suppressed: F) -> Vec<KeyValuePair>
where
    I: IntoIterator<Item = RawPair<'a>>,
    F: Fn(&str) -> bool,
{
    raw.into_iter()
        .filter(|pair| {
            let drop = is_suppressed(pair.key);
            if drop {
                tracing::trace!(key = pair.key, "suppressed header");
            }
            !drop
        })
        .map(normalize_pair)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw<'a>(key: &'a str, value: &'a Value) -> RawPair<'a> {
        RawPair {
            key,
            value,
            description: "",
        }
    }

    #[test]
    fn test_values_keep_shape() {
        let values = vec![
            json!("text"),
            json!(3.5),
            json!(true),
            json!(["a", 1]),
            json!({"nested": {"deep": null}}),
        ];
        let pairs = normalize_pairs(values.iter().map(|v| raw("k", v)));
        let out: Vec<Value> = pairs.into_iter().map(|p| p.value).collect();
        assert_eq!(out, values);
    }

    #[test]
    fn test_name_mirrors_key() {
        let value = json!("v");
        let pair = normalize_pair(RawPair {
            key: "Accept",
            value: &value,
            description: "what we take",
        });
        assert_eq!(pair.name, "Accept");
        assert_eq!(pair.key, "Accept");
        assert_eq!(pair.description, "what we take");
    }

    #[test]
    fn test_filter_drops_every_match_and_is_idempotent() {
        let value = json!("x");
        let keys = ["Date", "Accept", "Date", "Server"];
        let suppressed = |k: &str| k == "Date";

        let once = normalize_filtered(keys.iter().map(|k| raw(k, &value)), suppressed);
        let got: Vec<&str> = once.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(got, vec!["Accept", "Server"]);

        let twice = normalize_filtered(
            once.iter().map(|p| RawPair {
                key: &p.key,
                value: &p.value,
                description: &p.description,
            }),
            suppressed,
        );
        assert_eq!(twice, once);
    }
}
