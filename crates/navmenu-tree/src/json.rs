//! Strict JSON input.
//!
//! `serde_json::Value` keeps the last of repeated object keys. Navigation
//! sources are parsed through [`StrictValue`] instead, which rejects them the
//! same way the `menudata.js` parser does.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};

use crate::error::ParseError;

/// Parse a JSON document, rejecting duplicate keys.
pub(crate) fn parse_json(src: &str) -> Result<Value, ParseError> {
    let StrictValue(value) = serde_json::from_str(src)?;
    Ok(value)
}

struct StrictValue(Value);

impl<'de> Deserialize<'de> for StrictValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StrictVisitor).map(StrictValue)
    }
}

struct StrictVisitor;

impl<'de> Visitor<'de> for StrictVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(StrictValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::new();
        while let Some(key) = access.next_key::<String>()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate key `{key}`")));
            }
            let StrictValue(value) = access.next_value()?;
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_json_nested() {
        let value = parse_json(r#"{"children": [{"text": "A", "url": "a.html", "n": 1.5}]}"#)
            .unwrap();

        assert_eq!(
            value,
            json!({"children": [{"text": "A", "url": "a.html", "n": 1.5}]})
        );
    }

    #[test]
    fn test_parse_json_duplicate_key_rejected() {
        let err = parse_json(r#"{"text": "A", "text": "B", "url": "a.html"}"#).unwrap_err();

        assert_eq!(err.message, "duplicate key `text`");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_parse_json_same_key_in_sibling_records() {
        let value = parse_json(r#"[{"text": "A"}, {"text": "B"}]"#).unwrap();

        assert_eq!(value, json!([{"text": "A"}, {"text": "B"}]));
    }
}
