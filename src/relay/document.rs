//! YAML decode/encode for relayed configuration documents.
//!
//! Documents are held as an insertion-ordered `serde_yaml::Mapping` so any
//! field the relay does not touch survives the round trip intact.

use serde::Deserialize;
use serde_yaml::{Deserializer, Mapping, Value};

use crate::relay::error::{RelayError, RelayResult};

/// Parse an upstream body into its top-level mapping.
///
/// Only the first document of a multi-document stream is read; anything
/// after a `---` separator is ignored. A stream with no document, or whose
/// first document is an explicit null, yields an empty mapping. Scalar or
/// sequence roots are rejected.
pub fn decode_document(bytes: &[u8]) -> RelayResult<Mapping> {
    let value = match Deserializer::from_slice(bytes).next() {
        Some(first) => Value::deserialize(first).map_err(RelayError::Decode)?,
        None => Value::Null,
    };
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(RelayError::NotAMapping(value_kind(&other))),
    }
}

/// Serialize a mapping back to YAML text.
pub fn encode_document(document: Mapping) -> RelayResult<String> {
    serde_yaml::to_string(&Value::Mapping(document)).map_err(RelayError::Encode)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
