//! Schema fragments and registry entries

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::types::TypeDescriptor;

/// Default prefix for `$ref` pointers into the components section
pub const DEFAULT_REFERENCE_PREFIX: &str = "#/components/schemas/";

/// A rendered schema fragment
///
/// `content` is opaque to the registry. `registry_key` is the back-reference
/// written when the fragment is registered, so document assembly can point at
/// it by name without deriving the key again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The schema body (as JSON)
    pub content: serde_json::Value,

    /// Name this fragment was registered under
    #[serde(skip)]
    pub registry_key: Option<String>,
}

impl Schema {
    /// Create an unregistered schema fragment
    pub fn new(content: serde_json::Value) -> Self {
        Self {
            content,
            registry_key: None,
        }
    }

    /// Name this fragment was registered under, if any
    pub fn registry_key(&self) -> Option<&str> {
        self.registry_key.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.registry_key.is_some()
    }

    /// A `{"$ref": ...}` pointer to this fragment, if it has been registered
    pub fn reference(&self, prefix: &str) -> Option<serde_json::Value> {
        self.registry_key
            .as_ref()
            .map(|key| json!({ "$ref": format!("{}{}", prefix, key) }))
    }
}

/// A named schema in the registry
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    /// Unique name (e.g. "User", "BoxString")
    pub name: String,
    /// The registered fragment
    pub schema: Schema,
    /// The type the name is bound to
    pub type_descriptor: TypeDescriptor,
}

impl SchemaEntry {
    pub fn new(name: impl Into<String>, schema: Schema, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            schema,
            type_descriptor,
        }
    }
}
