//! Configuration for the populator and the generator.
//!
//! Both halves default to `false`/`None`. A configuration may be loaded from
//! a JSON file; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{DtoError, Result};

/// Configuration for the `Populator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulatorConfig {
    /// Silently ignore fields the record does not declare
    pub suppress_property_not_found: bool,
    /// Return the record unchanged for unknown dynamic operations
    pub suppress_method_not_found: bool,
    /// Store undeclared fields in the record's extra-properties field
    pub force_properties: bool,
}

impl PopulatorConfig {
    /// Configuration that suppresses both not-found errors
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            suppress_property_not_found: true,
            suppress_method_not_found: true,
            force_properties: false,
        }
    }
}

/// Configuration for the `Generator`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Folder, relative to the source root, that receives new records
    pub folder_name: Option<String>,
    /// Append `Dto` to generated record names
    pub attach_dto: bool,
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtoConfig {
    /// Populator settings
    pub populator: PopulatorConfig,
    /// Generator settings
    pub generator: GeneratorConfig,
}

impl DtoConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DtoError::Config(e.to_string()))
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "dto configuration")?;
        Self::from_json_str(&content)
            .map_err(|e| DtoError::Config(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let config = DtoConfig::default();
        assert!(!config.populator.suppress_property_not_found);
        assert!(!config.populator.suppress_method_not_found);
        assert!(!config.populator.force_properties);
        assert_eq!(config.generator.folder_name, None);
        assert!(!config.generator.attach_dto);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DtoConfig::from_json_str(
            r#"{ "populator": { "suppress_property_not_found": true }, "generator": { "folder_name": "records" } }"#,
        )
        .unwrap();
        assert!(config.populator.suppress_property_not_found);
        assert!(!config.populator.force_properties);
        assert_eq!(config.generator.folder_name.as_deref(), Some("records"));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = DtoConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DtoError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dto.json");
        std::fs::write(&path, r#"{ "generator": { "attach_dto": true } }"#).unwrap();

        let config = DtoConfig::from_file(&path).unwrap();
        assert!(config.generator.attach_dto);
    }
}
