//! Naming configuration

use serde::{Deserialize, Serialize};

/// Controls how schema names are derived from type descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Annotation that can pin a type's schema name
    #[serde(default = "default_override_annotation")]
    pub override_annotation: String,

    /// First option an override annotation must carry, e.g. `openapi("name", "Foo")`
    #[serde(default = "default_override_option")]
    pub override_option: String,

    /// Segment appended to an element key to name its array
    #[serde(default = "default_array_suffix")]
    pub array_suffix: String,
}

fn default_override_annotation() -> String {
    "openapi".to_string()
}

fn default_override_option() -> String {
    "name".to_string()
}

fn default_array_suffix() -> String {
    "Array".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            override_annotation: default_override_annotation(),
            override_option: default_override_option(),
            array_suffix: default_array_suffix(),
        }
    }
}
