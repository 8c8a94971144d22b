//! Read-side accessors over a populated record.

use crate::record::Record;
use crate::value::{Mapping, Value};

/// Extract field data from a record as a [`Mapping`]
pub trait DataAccess: Record {
    /// Values of the record's `keys`, with null for keys never assigned
    ///
    /// When no keys are configured, `fallback` selects between
    /// [`filled_data`](Self::filled_data) and an empty mapping.
    fn compact_data(&self, fallback: bool) -> Mapping {
        let keys = &Self::schema().policy().keys;
        if keys.is_empty() {
            return if fallback {
                self.filled_data()
            } else {
                Mapping::new()
            };
        }

        keys.iter()
            .map(|key| (key.clone(), self.get(key).unwrap_or(Value::Null)))
            .collect()
    }

    /// Every assigned field that population may touch
    fn filled_data(&self) -> Mapping {
        Self::schema()
            .eligible_fields()
            .filter_map(|field| {
                self.get(&field.name)
                    .map(|value| (field.name.clone(), value))
            })
            .collect()
    }

    /// Assigned file fields
    fn file_data(&self) -> Mapping {
        Self::schema()
            .policy()
            .files
            .iter()
            .filter_map(|name| self.get(name).map(|value| (name.clone(), value)))
            .collect()
    }

    /// Compact data merged with file data
    fn all_data(&self) -> Mapping {
        let mut data = self.compact_data(false);
        data.extend(self.file_data());
        data
    }
}

impl<R: Record> DataAccess for R {}
