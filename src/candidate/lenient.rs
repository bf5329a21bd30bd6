//! Lenient field deserializers for candidate records.
//!
//! Candidate data arrives from loosely typed stores, so a field holding the
//! wrong JSON shape is treated as absent instead of failing the whole record.
//! Every helper here first reads a [`serde_json::Value`] and then coerces it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string field; any other shape (including null) becomes `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// An identifier given either as a string or as a number.
///
/// Blank strings are treated as missing.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A list of strings. Non-string elements are dropped; a non-list becomes empty.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => strings_of(items),
        _ => Vec::new(),
    })
}

/// A list of strings that may also be given as a single string.
pub fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => vec![s],
        Value::Array(items) => strings_of(items),
        _ => Vec::new(),
    })
}

/// A list of structured items. Elements that do not deserialize into `T`
/// are dropped; a non-list becomes empty.
pub fn item_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn strings_of(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "opt_string")]
        text: Option<String>,
        #[serde(deserialize_with = "opt_id")]
        id: Option<String>,
        #[serde(deserialize_with = "string_list")]
        list: Vec<String>,
        #[serde(deserialize_with = "string_or_list")]
        flexible: Vec<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_wrong_shapes_become_absent() {
        let p = probe(r#"{"text": 42, "id": true, "list": "rust", "flexible": {"a": 1}}"#);
        assert_eq!(p.text, None);
        assert_eq!(p.id, None);
        assert!(p.list.is_empty());
        assert!(p.flexible.is_empty());
    }

    #[test]
    fn test_null_and_missing() {
        let p = probe(r#"{"text": null, "list": null}"#);
        assert_eq!(p.text, None);
        assert!(p.list.is_empty());
        assert!(p.flexible.is_empty());
    }

    #[test]
    fn test_numeric_and_blank_ids() {
        assert_eq!(probe(r#"{"id": 17}"#).id.as_deref(), Some("17"));
        assert_eq!(probe(r#"{"id": "c-1"}"#).id.as_deref(), Some("c-1"));
        assert_eq!(probe(r#"{"id": "  "}"#).id, None);
    }

    #[test]
    fn test_lists_drop_foreign_elements() {
        let p = probe(r#"{"list": ["rust", 3, null, "go"], "flexible": "kafka"}"#);
        assert_eq!(p.list, vec!["rust", "go"]);
        assert_eq!(p.flexible, vec!["kafka"]);
    }
}
