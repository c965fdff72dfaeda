//! Decoding of classified flag content.
//!
//! [`decode_generic`] first reads the document as a mapping, the usual
//! shape of a structured flag. When the root turns out to be a sequence
//! the first pass reports `RootShape::Sequence` instead of failing and
//! the document is decoded a second time as a list. That single retry is
//! the only fallback: any other failure is returned as is.
//!
//! YAML is loaded into a tree first (see `yaml::load`), so its root
//! shape is read off the tree and needs no second parse.

use serde::de::{
    self, DeserializeOwned, Error as _, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

use crate::error::FlagError;
use crate::format::Format;
use crate::yaml;

#[derive(Debug, Clone, PartialEq)]
/// Generic value of a structured flag, tagged by its root shape.
pub enum Decoded {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

impl Decoded {
    pub fn is_object(&self) -> bool {
        matches!(self, Decoded::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Decoded::Array(_))
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Decoded::Object(map) => Some(map),
            Decoded::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Decoded::Array(items) => Some(items),
            Decoded::Object(_) => None,
        }
    }

    /// Name of the root shape, `object` or `array`.
    pub fn shape(&self) -> &'static str {
        match self {
            Decoded::Object(_) => "object",
            Decoded::Array(_) => "array",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Decoded::Object(map) => Value::Object(map),
            Decoded::Array(items) => Value::Array(items),
        }
    }
}

impl From<Decoded> for Value {
    fn from(decoded: Decoded) -> Self {
        decoded.into_value()
    }
}

impl Serialize for Decoded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Decoded::Object(map) => map.serialize(serializer),
            Decoded::Array(items) => items.serialize(serializer),
        }
    }
}

/// Outcome of the mapping-first pass.
enum RootShape {
    Object(Map<String, Value>),
    /// The root is a sequence; its elements were skipped, not kept.
    Sequence,
}

impl<'de> Deserialize<'de> for RootShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RootShapeVisitor)
    }
}

struct RootShapeVisitor;

impl<'de> Visitor<'de> for RootShapeVisitor {
    type Value = RootShape;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RootShape, A::Error> {
        let mut map = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(RootShape::Object(map))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<RootShape, A::Error> {
        while access.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RootShape::Sequence)
    }

    // An empty or null document leaves the mapping empty.
    fn visit_unit<E: de::Error>(self) -> Result<RootShape, E> {
        Ok(RootShape::Object(Map::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<RootShape, E> {
        Ok(RootShape::Object(Map::new()))
    }
}

fn from_bytes<T: DeserializeOwned>(content: &[u8], format: Format) -> Result<T, FlagError> {
    match format {
        Format::Json => serde_json::from_slice(content).map_err(|e| FlagError::decode(format, e)),
        Format::Yaml => yaml::load(content)
            .and_then(|value| T::deserialize(value))
            .map_err(|e| FlagError::decode(format, e)),
    }
}

fn decode_yaml(content: &[u8]) -> Result<Decoded, FlagError> {
    let node = yaml::load(content)
        .and_then(yaml::to_node)
        .map_err(|e| FlagError::decode(Format::Yaml, e))?;
    match node {
        Value::Object(map) => Ok(Decoded::Object(map)),
        Value::Array(items) => {
            debug!(format = %Format::Yaml, "Document root is a sequence, decoding as array");
            Ok(Decoded::Array(items))
        }
        Value::Null => Ok(Decoded::Object(Map::new())),
        other => {
            let unexpected = match &other {
                Value::Bool(b) => Unexpected::Bool(*b),
                Value::String(s) => Unexpected::Str(s),
                _ => Unexpected::Other("number"),
            };
            let err = serde_yaml::Error::invalid_type(unexpected, &RootShapeVisitor);
            Err(FlagError::decode(Format::Yaml, err))
        }
    }
}

/// Decodes `content` into a generic object or array.
///
/// # Example
/// ```
/// use complexflag::{decode_generic, Format};
/// let list = decode_generic(b"---\n- one\n- two", Format::Yaml).unwrap();
/// assert_eq!(list.as_array().map(|items| items.len()), Some(2));
/// ```
pub fn decode_generic(content: &[u8], format: Format) -> Result<Decoded, FlagError> {
    if format == Format::Yaml {
        return decode_yaml(content);
    }
    match from_bytes::<RootShape>(content, format)? {
        RootShape::Object(map) => Ok(Decoded::Object(map)),
        RootShape::Sequence => {
            debug!(%format, "Document root is a sequence, decoding as array");
            let items: Vec<Value> = from_bytes(content, format)?;
            Ok(Decoded::Array(items))
        }
    }
}

/// Decodes `content` straight into `T` with the format's own decoder.
/// The shape of `T` decides what the document must look like.
pub fn decode_into<T: DeserializeOwned>(content: &[u8], format: Format) -> Result<T, FlagError> {
    from_bytes(content, format)
}
