//! Named operations on records.
//!
//! Callers that receive an operation by name (`withName`, `addData`,
//! `fromArray`, `fromRequest`, `forceProperty`) parse it into an
//! [`Operation`] and run it through [`Populator::dispatch`].

use std::fmt;

use log::{debug, trace};

use crate::error::{DtoError, Result};
use crate::populator::Populator;
use crate::record::Record;
use crate::request::Request;
use crate::schema::field_def::lower_first;
use crate::value::{Mapping, Value};

/// An argument passed to a named operation
#[derive(Clone)]
pub enum Argument<'a> {
    /// A plain value
    Value(Value),
    /// A request to populate from
    Request(&'a dyn Request),
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Request(_) => f.write_str("Request(..)"),
        }
    }
}

impl From<Value> for Argument<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<'a, R: Request> From<&'a R> for Argument<'a> {
    fn from(request: &'a R) -> Self {
        Self::Request(request)
    }
}

/// A parsed operation
#[derive(Clone)]
pub enum Operation<'a> {
    /// Assign one field on a copy of the record
    With {
        /// Field name, first character lower-cased
        field: String,
        /// The value to assign
        value: Value,
    },
    /// Assign several fields on a copy of the record
    AddData(Mapping),
    /// Build a fresh record from a mapping
    FromMapping(Mapping),
    /// Build a fresh record from a request
    FromRequest(&'a dyn Request),
    /// Enable force-properties for the rest of the call chain
    ForceProperty,
}

impl fmt::Debug for Operation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::With { field, value } => f
                .debug_struct("With")
                .field("field", field)
                .field("value", value)
                .finish(),
            Self::AddData(data) => f.debug_tuple("AddData").field(data).finish(),
            Self::FromMapping(data) => f.debug_tuple("FromMapping").field(data).finish(),
            Self::FromRequest(_) => f.write_str("FromRequest(..)"),
            Self::ForceProperty => f.write_str("ForceProperty"),
        }
    }
}

impl<'a> Operation<'a> {
    /// Parse a method name and its arguments
    ///
    /// Returns `Ok(None)` when `method` names no known operation and
    /// `WrongArgument` when it does but the arguments have the wrong shape.
    pub fn parse(method: &str, args: Vec<Argument<'a>>) -> Result<Option<Self>> {
        let op = match method {
            "addData" => Self::AddData(single_mapping(method, args)?),
            "fromArray" => Self::FromMapping(single_mapping(method, args)?),
            "fromRequest" => match args.into_iter().next() {
                Some(Argument::Request(request)) => Self::FromRequest(request),
                _ => {
                    return Err(DtoError::wrong_argument(
                        "fromRequest expects a request argument",
                    ));
                }
            },
            _ if method.eq_ignore_ascii_case("forceProperty") => Self::ForceProperty,
            _ => match method.strip_prefix("with") {
                Some(suffix) if !suffix.is_empty() => {
                    let value = match args.into_iter().next() {
                        Some(Argument::Value(value)) => value,
                        Some(Argument::Request(_)) => {
                            return Err(DtoError::wrong_argument(format!(
                                "{method} expects a value argument"
                            )));
                        }
                        None => {
                            return Err(DtoError::wrong_argument(format!(
                                "{method} expects one argument"
                            )));
                        }
                    };
                    Self::With {
                        field: lower_first(suffix),
                        value,
                    }
                }
                _ => return Ok(None),
            },
        };
        Ok(Some(op))
    }
}

fn single_mapping(method: &str, args: Vec<Argument<'_>>) -> Result<Mapping> {
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(Argument::Value(Value::Object(map))), None) => Ok(map),
        _ => Err(DtoError::wrong_argument(format!(
            "{method} expects a single mapping argument"
        ))),
    }
}

impl Populator {
    /// Parse and run a named operation against `record`
    ///
    /// The result is always a new record; `record` itself is never mutated.
    /// `forceProperty` updates this populator and returns a copy of the
    /// record unchanged.
    pub fn dispatch<R: Record>(
        &mut self,
        record: &R,
        method: &str,
        args: Vec<Argument<'_>>,
    ) -> Result<R> {
        match Operation::parse(method, args)? {
            Some(op) => self.apply(record, op),
            None if self.config().suppress_method_not_found => {
                debug!("{}: ignoring unknown method {method}", R::schema().name());
                Ok(record.clone())
            }
            None => Err(DtoError::method_not_found(R::schema().name(), method)),
        }
    }

    /// Run an already parsed operation
    pub fn apply<R: Record>(&mut self, record: &R, op: Operation<'_>) -> Result<R> {
        trace!("{}: applying {op:?}", R::schema().name());
        match op {
            Operation::With { field, value } => self.with(record, &field, value),
            Operation::AddData(data) => self.add_data(record, &data),
            Operation::FromMapping(data) => self.from_mapping(&data),
            Operation::FromRequest(request) => self.from_request(request),
            Operation::ForceProperty => {
                self.enable_force_properties();
                Ok(record.clone())
            }
        }
    }
}
