//! Conversions into structured field types.

use crate::value::{ObjectMap, Value};

/// Key used when a scalar is wrapped into an object
pub const SCALAR_KEY: &str = "scalar";

/// Decode JSON text into a value
///
/// Returns `None` when the text is not valid JSON or decodes to `null`.
#[must_use]
pub fn decode_json(text: &str) -> Option<Value> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::Null) | Err(_) => None,
        Ok(json) => Some(Value::from(json)),
    }
}

fn index_keyed(items: Vec<Value>) -> ObjectMap {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| (idx.to_string(), item))
        .collect()
}

/// Coerce a value to a structured array
///
/// Arrays pass through; objects become the list of their values; text is
/// decoded as JSON and the result converted the same way, with undecodable
/// text yielding an empty array; any other scalar is wrapped in a
/// one-element array.
#[must_use]
pub fn coerce_array(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(map) => Value::Array(map.into_values().collect()),
        Value::Text(text) => match decode_json(&text) {
            Some(Value::Array(items)) => Value::Array(items),
            Some(Value::Object(map)) => Value::Array(map.into_values().collect()),
            Some(scalar) => Value::Array(vec![scalar]),
            None => Value::Array(Vec::new()),
        },
        Value::Null => Value::Array(Vec::new()),
        scalar => Value::Array(vec![scalar]),
    }
}

/// Coerce a value to a free-form object
///
/// Objects pass through; arrays become objects keyed by index; text is
/// decoded as JSON and the result converted the same way, with undecodable
/// text yielding an empty object; any other scalar is stored under
/// [`SCALAR_KEY`].
#[must_use]
pub fn coerce_object(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map),
        Value::Array(items) => Value::Object(index_keyed(items)),
        Value::Text(text) => match decode_json(&text) {
            Some(Value::Object(map)) => Value::Object(map),
            Some(Value::Array(items)) => Value::Object(index_keyed(items)),
            Some(scalar) => Value::Object(ObjectMap::from([(SCALAR_KEY.to_string(), scalar)])),
            None => Value::Object(ObjectMap::new()),
        },
        Value::Null => Value::Object(ObjectMap::new()),
        scalar => Value::Object(ObjectMap::from([(SCALAR_KEY.to_string(), scalar)])),
    }
}
