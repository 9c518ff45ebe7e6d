// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON bridge for native values.
//!
//! Serializes configuration trees (for inspection and for handing to hosts that
//! accept JSON) and parses JSON default tables.

use crate::domain::{ConfigError, NativeObject, NativeValue, Result};
use crate::ports::DefaultsParser;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Largest magnitude below which whole numbers are written without a fraction.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            NativeValue::Null => serializer.serialize_unit(),
            NativeValue::Boolean(b) => serializer.serialize_bool(*b),
            NativeValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            NativeValue::String(s) => serializer.serialize_str(s),
            NativeValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            NativeValue::Object(object) => object.serialize(serializer),
            NativeValue::External(handle) => serializer.serialize_str(&handle.to_string()),
            NativeValue::Callback(marker) => serializer.serialize_str(&marker.to_string()),
        }
    }
}

impl Serialize for NativeObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<serde_json::Value> for NativeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => NativeValue::Null,
            serde_json::Value::Bool(b) => NativeValue::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(NativeValue::Null, NativeValue::Number),
            serde_json::Value::String(s) => NativeValue::String(s),
            serde_json::Value::Array(items) => {
                NativeValue::Array(items.into_iter().map(NativeValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                let object = NativeObject::new();
                for (key, value) in map {
                    object.set(&key, NativeValue::from(value));
                }
                NativeValue::Object(object)
            }
        }
    }
}

/// Serializes an object to compact JSON.
pub fn to_json(object: &NativeObject) -> Result<String> {
    serde_json::to_string(object).map_err(serialize_error)
}

/// Serializes an object to indented JSON.
pub fn to_json_pretty(object: &NativeObject) -> Result<String> {
    serde_json::to_string_pretty(object).map_err(serialize_error)
}

fn serialize_error(e: serde_json::Error) -> ConfigError {
    ConfigError::ParseError {
        message: format!("Failed to serialize to JSON: {}", e),
        source: Some(Box::new(e)),
    }
}

/// JSON parser for default tables.
///
/// # Examples
///
/// ```rust
/// use chartcfg::adapters::JsonParser;
/// use chartcfg::domain::NativeValue;
/// use chartcfg::ports::DefaultsParser;
///
/// let table = JsonParser::new().parse(r#"{"font": {"size": 12}}"#).unwrap();
/// let font = table.get("font").and_then(|v| v.as_object().cloned()).unwrap();
/// assert_eq!(font.get("size"), Some(NativeValue::from(12)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl DefaultsParser for JsonParser {
    fn parse(&self, content: &str) -> Result<NativeObject> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        match NativeValue::from(value) {
            NativeValue::Object(object) => Ok(object),
            _ => Err(ConfigError::ParseError {
                message: "The root of a defaults document must be a map".to_string(),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CallbackMarker, ExternalHandle, HandleKind};

    #[test]
    fn test_serialize_scalars() {
        let object = NativeObject::from_entries([("a", 5)]);
        object.set("b", NativeValue::from(1.5));
        object.set("c", NativeValue::from("x"));
        object.set("d", NativeValue::from(false));
        object.set("e", NativeValue::Null);
        assert_eq!(
            to_json(&object).unwrap(),
            r#"{"a":5,"b":1.5,"c":"x","d":false,"e":null}"#
        );
    }

    #[test]
    fn test_serialize_nested() {
        let padding = NativeObject::from_entries([("top", 5)]);
        let object = NativeObject::new();
        object.set("padding", padding.into());
        object.set("colors", NativeValue::from(vec!["red", "blue"]));
        assert_eq!(
            to_json(&object).unwrap(),
            r#"{"padding":{"top":5},"colors":["red","blue"]}"#
        );
    }

    #[test]
    fn test_serialize_opaque_values() {
        let handle = ExternalHandle::new(HandleKind::Gradient);
        let marker = CallbackMarker::new();
        let object = NativeObject::new();
        object.set("color", handle.into());
        object.set("callback", marker.into());

        let json = to_json(&object).unwrap();
        assert!(json.contains(&format!("\"<gradient#{}>\"", handle.id())));
        assert!(json.contains(&format!("\"<callback#{}>\"", marker.id())));
    }

    #[test]
    fn test_parse_json() {
        let table = JsonParser::new()
            .parse(r#"{"responsive": true, "padding": {"top": 4}, "list": [1, 2]}"#)
            .unwrap();
        assert_eq!(table.get("responsive"), Some(NativeValue::from(true)));
        assert_eq!(table.get("list"), Some(NativeValue::from(vec![1, 2])));
        assert_eq!(table.keys(), vec!["responsive", "padding", "list"]);
    }

    #[test]
    fn test_parse_non_map_root() {
        let result = JsonParser::new().parse("[1, 2]");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = JsonParser::new().parse("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_pretty_output() {
        let object = NativeObject::from_entries([("a", 1)]);
        assert_eq!(to_json_pretty(&object).unwrap(), "{\n  \"a\": 1\n}");
    }
}
