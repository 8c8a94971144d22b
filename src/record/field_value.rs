//! Conversions between Rust field types and [`Value`].
//!
//! The derive macro uses [`FieldValue`] to learn each field's declared type
//! and to move values in and out of `Slot<T>` fields.

use crate::error::{DtoError, Result};
use crate::file::UploadedFile;
use crate::schema::FieldType;
use crate::schema::adapt::{to_float, to_integer};
use crate::value::{ObjectMap, Value};

/// A Rust type that can be stored in a record field
pub trait FieldValue: Sized + Clone {
    /// Declared type reported in the record schema
    const FIELD_TYPE: FieldType;

    /// Whether null is a legal value
    const NULLABLE: bool = false;

    /// Convert an (already coerced) value into this type
    fn from_value(value: Value) -> Result<Self>;

    /// Convert this field value back into a [`Value`]
    fn to_value(&self) -> Value;
}

fn mismatch<T>(expected: FieldType, value: &Value) -> Result<T> {
    Err(DtoError::wrong_argument(format!(
        "cannot store {} value in a {expected} field",
        value.type_name()
    )))
}

impl FieldValue for String {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            other => other
                .to_text()
                .map_or_else(|| mismatch(Self::FIELD_TYPE, &other), Ok),
        }
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for i64 {
    const FIELD_TYPE: FieldType = FieldType::Integer;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::Text(_) => {
                Ok(to_integer(&value))
            }
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl FieldValue for i32 {
    const FIELD_TYPE: FieldType = FieldType::Integer;

    fn from_value(value: Value) -> Result<Self> {
        let wide = i64::from_value(value)?;
        Self::try_from(wide)
            .map_err(|_| DtoError::wrong_argument(format!("{wide} does not fit in a 32-bit field")))
    }

    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FieldValue for f64 {
    const FIELD_TYPE: FieldType = FieldType::Float;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::Text(_) => Ok(to_float(&value)),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FieldValue for f32 {
    const FIELD_TYPE: FieldType = FieldType::Float;

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|f| f as Self)
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FieldValue for bool {
    const FIELD_TYPE: FieldType = FieldType::Boolean;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::Int(i) => Ok(i != 0),
            Value::Float(f) => Ok(f != 0.0),
            // Any text other than an explicit "off" word is true
            Value::Text(s) => Ok(!matches!(
                s.trim().to_lowercase().as_str(),
                "" | "0" | "false" | "off" | "no"
            )),
            Value::Array(items) => Ok(!items.is_empty()),
            Value::Object(map) => Ok(!map.is_empty()),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for Vec<Value> {
    const FIELD_TYPE: FieldType = FieldType::Array;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(items),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Array(self.clone())
    }
}

impl FieldValue for ObjectMap {
    const FIELD_TYPE: FieldType = FieldType::Object;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl FieldValue for UploadedFile {
    const FIELD_TYPE: FieldType = FieldType::File;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::File(file) => Ok(file),
            Value::Text(path) => Self::from_path(path),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::File(self.clone())
    }
}

impl FieldValue for Vec<UploadedFile> {
    const FIELD_TYPE: FieldType = FieldType::FileList;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(UploadedFile::from_value).collect(),
            single @ (Value::File(_) | Value::Text(_)) => Ok(vec![UploadedFile::from_value(single)?]),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().cloned().map(Value::File).collect())
    }
}

impl FieldValue for Value {
    const FIELD_TYPE: FieldType = FieldType::Other;

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const NULLABLE: bool = true;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, T::to_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accepts_scalars() {
        assert_eq!(String::from_value(Value::Int(123)).unwrap(), "123");
        assert!(String::from_value(Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_nullable_reports_inner_type() {
        assert_eq!(<Option<String> as FieldValue>::FIELD_TYPE, FieldType::Text);
        assert!(<Option<String> as FieldValue>::NULLABLE);
        assert!(!<String as FieldValue>::NULLABLE);
        assert_eq!(Option::<i64>::from_value(Value::Null).unwrap(), None);
        assert_eq!(Option::<i64>::from_value(Value::Int(4)).unwrap(), Some(4));
    }

    #[test]
    fn test_bool_from_text() {
        assert!(bool::from_value(Value::from("true")).unwrap());
        assert!(!bool::from_value(Value::from("0")).unwrap());
        assert!(!bool::from_value(Value::from(" Off ")).unwrap());
        assert!(!bool::from_value(Value::from("")).unwrap());
        for text in ["2", "maybe", "checked"] {
            assert!(bool::from_value(Value::from(text)).unwrap(), "{text}");
        }
        assert!(!bool::from_value(Value::Array(vec![])).unwrap());
        assert!(bool::from_value(Value::Array(vec![Value::Int(0)])).unwrap());
    }

    #[test]
    fn test_i32_overflow_is_wrong_argument() {
        let err = i32::from_value(Value::Int(i64::MAX)).unwrap_err();
        assert!(matches!(err, DtoError::WrongArgument(_)));
    }

    #[test]
    fn test_file_list_accepts_single_file() {
        let file = UploadedFile::new("/tmp/a.png", "a.png", "image/png");
        let files = Vec::<UploadedFile>::from_value(Value::File(file.clone())).unwrap();
        assert_eq!(files, vec![file]);
    }
}
