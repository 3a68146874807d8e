//! Configuration management for schema naming
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (schema-names.toml)
//! - Environment variables (SCHEMA_NAMES__*)
//!
//! ## Example config file (schema-names.toml):
//! ```toml
//! [naming]
//! override_annotation = "openapi"
//! override_option = "name"
//! array_suffix = "Array"
//!
//! [registry]
//! reference_prefix = "#/components/schemas/"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::DEFAULT_REFERENCE_PREFIX;

pub use crate::naming::NamingConfig;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNamesConfig {
    /// Key derivation settings
    #[serde(default)]
    pub naming: NamingConfig,

    /// Registry settings
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Prefix for `$ref` pointers to registered schemas
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
}

fn default_reference_prefix() -> String {
    DEFAULT_REFERENCE_PREFIX.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reference_prefix: default_reference_prefix(),
        }
    }
}

impl SchemaNamesConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering a specific file over the default locations
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "schema-names.toml",
            ".schema-names.toml",
            "config/schema-names.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "schema-names") {
            let xdg_config = config_dir.config_dir().join("schema-names.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // SCHEMA_NAMES__NAMING__ARRAY_SUFFIX=List
        builder = builder.add_source(
            Environment::with_prefix("SCHEMA_NAMES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SchemaNamesConfig::default();
        assert_eq!(config.naming.override_annotation, "openapi");
        assert_eq!(config.naming.override_option, "name");
        assert_eq!(config.naming.array_suffix, "Array");
        assert_eq!(config.registry.reference_prefix, "#/components/schemas/");
    }

    #[test]
    fn test_serialize_config() {
        let config = SchemaNamesConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[naming]"));
        assert!(toml_str.contains("[registry]"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let path = path.to_str().unwrap();

        let mut config = SchemaNamesConfig::default();
        config.naming.array_suffix = "List".to_string();
        config.save(path).unwrap();

        let loaded = SchemaNamesConfig::load_from(Some(path)).unwrap();
        assert_eq!(loaded.naming.array_suffix, "List");
        assert_eq!(loaded.naming.override_annotation, "openapi");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[registry]\nreference_prefix = \"#/definitions/\"\n").unwrap();

        let loaded = SchemaNamesConfig::load_from(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.registry.reference_prefix, "#/definitions/");
        assert_eq!(loaded.naming, NamingConfig::default());
    }
}
