//! Error handling for record population and stub generation.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for `dto-kit`
#[derive(Debug, thiserror::Error)]
pub enum DtoError {
    /// A field name was used that the record does not declare
    #[error("{property} property was not properly set on {record}")]
    PropertyNotFound {
        /// Name of the record type
        record: String,
        /// The undeclared field name
        property: String,
    },

    /// An unrecognized dynamic operation was invoked on a record
    #[error("{method} method was not found on {record}")]
    MethodNotFound {
        /// Name of the record type
        record: String,
        /// The operation name as it was invoked
        method: String,
    },

    /// An operation received an argument of the wrong shape
    #[error("Wrong argument: {0}")]
    WrongArgument(String),

    /// The generator refused to overwrite an existing file
    #[error("{} already exists. If you want to create it then set the --force option", .0.display())]
    FileAlreadyExists(PathBuf),

    /// The generator was asked to create a record with a reserved name
    #[error("Sorry, {0} name provided is reserved")]
    ReservedName(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Error reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DtoError {
    /// Build a `PropertyNotFound` error
    pub fn property_not_found(record: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            record: record.into(),
            property: property.into(),
        }
    }

    /// Build a `MethodNotFound` error
    pub fn method_not_found(record: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            record: record.into(),
            method: method.into(),
        }
    }

    /// Build a `WrongArgument` error
    pub fn wrong_argument(message: impl Into<String>) -> Self {
        Self::WrongArgument(message.into())
    }

    /// Whether this error may be silenced by a suppression flag
    #[must_use]
    pub const fn is_suppressible(&self) -> bool {
        matches!(self, Self::PropertyNotFound { .. } | Self::MethodNotFound { .. })
    }
}

/// Result type for `dto-kit` operations
pub type Result<T> = std::result::Result<T, DtoError>;
