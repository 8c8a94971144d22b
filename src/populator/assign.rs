//! Field assignment rules shared by every population path.

use log::{debug, warn};

use crate::error::{DtoError, Result};
use crate::file::UploadedFile;
use crate::record::Record;
use crate::schema::coerce;
use crate::value::Value;

use super::Populator;

impl Populator {
    /// Assign one named value to `record`
    ///
    /// The name is resolved through the schema (aliases included). File
    /// fields holding a non-null value are resolved to uploaded files;
    /// excluded fields are left untouched.
    pub fn assign<R: Record>(&self, record: &mut R, name: &str, value: Value) -> Result<()> {
        let schema = R::schema();

        let Some(field) = schema.field(name) else {
            return self.missing_property(record, name, value);
        };
        let field_name = field.name.as_str();

        if schema.is_file_field(field_name) && !value.is_null() {
            return self.assign_file(record, field_name, value);
        }

        if schema.is_excluded(field_name) {
            debug!("{}: skipping excluded field {field_name}", schema.name());
            return Ok(());
        }

        if !value.is_null() {
            return record.put(field_name, coerce(field.field_type, value));
        }

        if field.nullable {
            record.put(field_name, Value::Null)
        } else if record.is_set(field_name) {
            Ok(())
        } else {
            match field.field_type.default_value() {
                Some(default) => record.put(field_name, default),
                None => Ok(()),
            }
        }
    }

    /// Assign uploaded file(s) to a file field
    pub fn assign_file<R: Record>(&self, record: &mut R, name: &str, value: Value) -> Result<()> {
        let schema = R::schema();

        let Some(field) = schema.field(name) else {
            if self.config.suppress_property_not_found {
                debug!("{}: ignoring undeclared file field {name}", schema.name());
                return Ok(());
            }
            return Err(DtoError::property_not_found(schema.name(), name));
        };
        let field_name = field.name.as_str();

        if schema.is_excluded(field_name) {
            debug!("{}: skipping excluded file field {field_name}", schema.name());
            return Ok(());
        }

        record.put(field_name, resolve_file(value)?)
    }

    /// Give every eligible, still unset, non-file field its default
    ///
    /// Nullable fields become null; others get their type's default.
    pub fn fill_defaults<R: Record>(&self, record: &mut R) -> Result<()> {
        let schema = R::schema();

        for field in schema.eligible_fields() {
            if schema.is_file_field(&field.name) || record.is_set(&field.name) {
                continue;
            }

            let default = if field.nullable {
                Some(Value::Null)
            } else {
                field.field_type.default_value()
            };

            if let Some(default) = default {
                record.put(&field.name, default)?;
            }
        }

        Ok(())
    }

    fn missing_property<R: Record>(&self, record: &mut R, name: &str, value: Value) -> Result<()> {
        let schema = R::schema();

        if self.config.force_properties {
            if let Some(extra) = record.extra_mut() {
                extra.insert(name.to_string(), value);
                return Ok(());
            }
            warn!(
                "{}: force-properties is enabled but the record has no extra field, dropping {name}",
                schema.name()
            );
            return Ok(());
        }

        if self.config.suppress_property_not_found {
            debug!("{}: ignoring undeclared field {name}", schema.name());
            return Ok(());
        }

        Err(DtoError::property_not_found(schema.name(), name))
    }
}

/// Turn a file-shaped value into `Value::File` (or an array of them)
fn resolve_file(value: Value) -> Result<Value> {
    match value {
        Value::File(_) => Ok(value),
        Value::Text(path) => UploadedFile::from_path(path).map(Value::File),
        Value::Array(items) => items
            .into_iter()
            .map(resolve_file)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Err(DtoError::wrong_argument(format!(
            "expected an uploaded file, got {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_file_rejects_numbers() {
        let err = resolve_file(Value::Int(3)).unwrap_err();
        assert!(matches!(err, DtoError::WrongArgument(_)));
    }

    #[test]
    fn test_resolve_file_keeps_uploads() {
        let file = UploadedFile::new("/tmp/a.png", "a.png", "image/png");
        let resolved = resolve_file(Value::Array(vec![Value::File(file.clone())])).unwrap();
        assert_eq!(resolved, Value::Array(vec![Value::File(file)]));
    }

    #[test]
    fn test_resolve_file_missing_path() {
        assert!(resolve_file(Value::from("/definitely/not/here.png")).is_err());
    }
}
