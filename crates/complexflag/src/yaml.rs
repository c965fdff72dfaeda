//! YAML loading shared by the generic and typed decoders.
//!
//! Only the first document of a stream is read. Merge keys (`<<`) are
//! applied and repeated keys are rejected before anything is decoded.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// Parses the first document of `content` and resolves its merge keys.
/// An empty stream reads as null.
pub(crate) fn load(content: &[u8]) -> Result<YamlValue, serde_yaml::Error> {
    let mut value = match serde_yaml::Deserializer::from_slice(content).next() {
        Some(document) => YamlValue::deserialize(document)?,
        None => YamlValue::Null,
    };
    value.apply_merge()?;
    Ok(value)
}

/// Converts a loaded YAML tree into a generic node.
///
/// Local tags are dropped and scalar keys are written as text. Values a
/// generic node cannot hold (`.inf`, `.nan`, collection keys) are errors.
pub(crate) fn to_node(value: YamlValue) -> Result<Value, serde_yaml::Error> {
    match value {
        YamlValue::Null => Ok(Value::Null),
        YamlValue::Bool(b) => Ok(Value::Bool(b)),
        YamlValue::Number(n) => number(&n).map(Value::Number),
        YamlValue::String(s) => Ok(Value::String(s)),
        YamlValue::Sequence(items) => items
            .into_iter()
            .map(to_node)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                let key = key_text(key)?;
                let value = to_node(value)?;
                if map.contains_key(&key) {
                    return Err(serde_yaml::Error::custom(format!(
                        "duplicate entry with key \"{key}\""
                    )));
                }
                map.insert(key, value);
            }
            Ok(Value::Object(map))
        }
        YamlValue::Tagged(tagged) => to_node(tagged.value),
    }
}

fn number(n: &serde_yaml::Number) -> Result<Number, serde_yaml::Error> {
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| serde_yaml::Error::custom(format!("number {n} has no JSON representation")))
}

fn key_text(key: YamlValue) -> Result<String, serde_yaml::Error> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_text(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(serde_yaml::Error::custom(
            "mapping keys must be scalars",
        )),
    }
}
