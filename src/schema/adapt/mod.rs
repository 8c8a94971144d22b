//! Module for adapting input values to a field's declared type.
//!
//! Coercion never fails: inputs that cannot be decoded into a structured
//! type become an empty structure, and unparsable numbers become zero.

pub mod conversions;
pub mod numeric;

pub use conversions::{coerce_array, coerce_object, decode_json};
pub use numeric::{numeric_prefix, to_float, to_integer};

use crate::schema::FieldType;
use crate::value::Value;

/// Coerce a non-null `value` to the given field type
///
/// | Declared type | Coercion |
/// |---|---|
/// | `Array` | see [`coerce_array`] |
/// | `Object` | see [`coerce_object`] |
/// | `Integer` | numeric truncation/parse |
/// | `Float` | numeric parse |
/// | anything else | unchanged |
#[must_use]
pub fn coerce(field_type: FieldType, value: Value) -> Value {
    match field_type {
        FieldType::Array => coerce_array(value),
        FieldType::Object => coerce_object(value),
        FieldType::Integer => Value::Int(to_integer(&value)),
        FieldType::Float => Value::Float(to_float(&value)),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ObjectMap;

    #[test]
    fn test_text_passes_through() {
        assert_eq!(coerce(FieldType::Text, Value::Int(5)), Value::Int(5));
        assert_eq!(coerce(FieldType::Boolean, Value::from("1")), Value::from("1"));
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(coerce(FieldType::Integer, Value::from("123")), Value::Int(123));
        assert_eq!(coerce(FieldType::Integer, Value::Float(9.99)), Value::Int(9));
        assert_eq!(coerce(FieldType::Float, Value::from("2.5kg")), Value::Float(2.5));
    }

    #[test]
    fn test_structured_coercion_failure_is_empty() {
        assert_eq!(
            coerce(FieldType::Array, Value::from("not json")),
            Value::Array(vec![])
        );
        assert_eq!(
            coerce(FieldType::Object, Value::from("{broken")),
            Value::Object(ObjectMap::new())
        );
    }
}
