//! Error types for schema naming and registration

use thiserror::Error;

use crate::types::TypeDescriptor;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema naming errors
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Two structurally different types resolved to the same schema name.
    ///
    /// `existing_type` is whatever was bound to `name` first; the registry is
    /// left untouched when this is returned.
    #[error("Name conflict: `{new_type}` and `{existing_type}` both resolve to schema name `{name}`")]
    NameConflict {
        name: String,
        new_type: Box<TypeDescriptor>,
        existing_type: Box<TypeDescriptor>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl SchemaError {
    /// Whether this error is a name conflict
    pub fn is_name_conflict(&self) -> bool {
        matches!(self, SchemaError::NameConflict { .. })
    }
}
