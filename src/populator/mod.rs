//! Populating records from mappings and requests.
//!
//! A [`Populator`] carries the suppression and force-properties flags and
//! applies the same assignment rules to any [`Record`].

mod accessors;
mod assign;

pub use accessors::DataAccess;

use log::debug;

use crate::config::PopulatorConfig;
use crate::error::Result;
use crate::record::Record;
use crate::request::Request;
use crate::schema::{FieldDefinition, RecordSchema, USER_FIELD, USER_ID_FIELD};
use crate::value::{Mapping, Value};

/// Fills records from external data
#[derive(Debug, Clone, Copy, Default)]
pub struct Populator {
    config: PopulatorConfig,
}

impl Populator {
    /// Create a populator with the given configuration
    #[must_use]
    pub const fn new(config: PopulatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &PopulatorConfig {
        &self.config
    }

    /// Enable storing undeclared fields in the record's extra store
    #[must_use]
    pub const fn force_properties(mut self) -> Self {
        self.config.force_properties = true;
        self
    }

    pub(crate) fn enable_force_properties(&mut self) {
        self.config.force_properties = true;
    }

    /// Build a new record from a mapping
    pub fn from_mapping<R: Record>(&self, data: &Mapping) -> Result<R> {
        let mut record = R::default();
        self.populate_from_mapping(&mut record, data)?;
        Ok(record)
    }

    /// Populate `record` from a mapping
    ///
    /// Every pair is assigned, remaining fields get their defaults, then the
    /// record's `after_mapping` hook runs.
    pub fn populate_from_mapping<R: Record>(&self, record: &mut R, data: &Mapping) -> Result<()> {
        for (name, value) in data {
            self.assign(record, name, value.clone())?;
        }
        self.fill_defaults(record)?;

        if let Some(replacement) = record.after_mapping(data) {
            *record = replacement;
        }
        Ok(())
    }

    /// Build a new record from a request
    pub fn from_request<R: Record>(&self, request: &dyn Request) -> Result<R> {
        let mut record = R::default();
        self.populate_from_request(&mut record, request)?;
        Ok(record)
    }

    /// Populate `record` from a request
    ///
    /// The authenticated user and owner id are assigned first. Declared
    /// fields are then looked up in the body by exact name, alias and finally
    /// case-insensitively; keys that are not found are left alone. Files come
    /// last, followed by defaults and the `after_request` hook.
    pub fn populate_from_request<R: Record>(
        &self,
        record: &mut R,
        request: &dyn Request,
    ) -> Result<()> {
        let schema = R::schema();
        debug!("Populating {} from request", schema.name());

        self.assign_user(record, request)?;

        let owner_id = schema.owner_id_field();
        if owner_id != USER_ID_FIELD && schema.has_field(&owner_id) {
            if let Some(value) = request.attribute(&owner_id) {
                self.assign(record, &owner_id, value)?;
            }
        }

        let body = record
            .request_data(request)
            .unwrap_or_else(|| request.input());

        for field in schema.eligible_fields() {
            if schema.is_file_field(&field.name) || is_user_field(&field.name) {
                continue;
            }
            if let Some(value) = lookup_body(field, &body) {
                self.assign(record, &field.name, value.clone())?;
            }
        }

        for name in &schema.policy().files {
            if let Some(files) = request.file(name) {
                self.assign_file(record, name, files)?;
            }
        }

        self.fill_defaults(record)?;

        if let Some(replacement) = record.after_request(request) {
            *record = replacement;
        }
        Ok(())
    }

    /// A copy of `record` with one field reassigned
    pub fn with<R: Record>(&self, record: &R, name: &str, value: impl Into<Value>) -> Result<R> {
        let mut copy = record.clone();
        self.assign(&mut copy, name, value.into())?;
        Ok(copy)
    }

    /// A copy of `record` with every pair of `data` assigned
    ///
    /// Unlike [`Populator::from_mapping`] no defaults are filled and no hook
    /// runs.
    pub fn add_data<R: Record>(&self, record: &R, data: &Mapping) -> Result<R> {
        let mut copy = record.clone();
        for (name, value) in data {
            self.assign(&mut copy, name, value.clone())?;
        }
        Ok(copy)
    }

    fn assign_user<R: Record>(&self, record: &mut R, request: &dyn Request) -> Result<()> {
        let schema: &RecordSchema = R::schema();
        let user = request.user();

        if schema.has_field(USER_FIELD) {
            let value = user.cloned().map_or(Value::Null, Value::from);
            self.assign(record, USER_FIELD, value)
        } else if schema.has_field(USER_ID_FIELD) {
            let value = user.map_or(Value::Null, |user| user.id.clone());
            self.assign(record, USER_ID_FIELD, value)
        } else {
            Ok(())
        }
    }
}

fn is_user_field(name: &str) -> bool {
    name == USER_FIELD || name == USER_ID_FIELD
}

fn lookup_body<'a>(field: &FieldDefinition, body: &'a Mapping) -> Option<&'a Value> {
    body.get(&field.name)
        .or_else(|| field.aliases.iter().find_map(|alias| body.get(alias)))
        .or_else(|| {
            body.iter()
                .find(|(key, _)| field.matches_name_ignore_case(key))
                .map(|(_, value)| value)
        })
}
