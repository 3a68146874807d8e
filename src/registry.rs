//! Schema Registry
//!
//! Name-keyed store of schema fragments for one document-generation run.
//! A name may only ever be bound to one structural type; registering the same
//! name for a different shape is a [`SchemaError::NameConflict`].
//!
//! The registry is plain owned state with no interior locking. Create one per
//! run and pass it through the generator by `&mut`.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::{RegistryConfig, SchemaNamesConfig};
use crate::error::{Result, SchemaError};
use crate::naming::{KeyDeriver, NamingConfig};
use crate::schema::{Schema, SchemaEntry};
use crate::types::TypeDescriptor;

/// The schema registry
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// name -> entry
    store: HashMap<String, SchemaEntry>,
    /// Key derivation policy
    deriver: KeyDeriver,
    /// Registry settings
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default naming
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with explicit settings
    pub fn with_config(naming: NamingConfig, config: RegistryConfig) -> Self {
        Self {
            store: HashMap::new(),
            deriver: KeyDeriver::new(naming),
            config,
        }
    }

    /// Create an empty registry from loaded configuration
    pub fn from_config(config: &SchemaNamesConfig) -> Self {
        Self::with_config(config.naming.clone(), config.registry.clone())
    }

    /// Derive the schema key for a type (`""` if it must be inlined)
    pub fn schema_key(&self, t: &TypeDescriptor) -> String {
        self.deriver.derive_key(t)
    }

    /// Register `schema` under `name` for type `t`.
    ///
    /// On success the fragment's back-reference is set to `name` and a copy is
    /// stored. The stored copy is a snapshot: edits made to `schema` after this
    /// call do not reach [`get`](Self::get) or [`to_components`](Self::to_components),
    /// so register fragments once they are fully built.
    ///
    /// Re-registering a name for a structurally equal type replaces the stored
    /// entry. A structurally different type fails with
    /// [`SchemaError::NameConflict`] and leaves both the store and `schema`
    /// untouched.
    pub fn register_schema(&mut self, name: &str, t: &TypeDescriptor, schema: &mut Schema) -> Result<()> {
        if let Some(existing) = self.store.get(name) {
            if !existing.type_descriptor.is_same_type(t) {
                warn!(
                    name = %name,
                    new_type = %t,
                    existing_type = %existing.type_descriptor,
                    "schema name conflict"
                );
                return Err(SchemaError::NameConflict {
                    name: name.to_string(),
                    new_type: Box::new(t.clone()),
                    existing_type: Box::new(existing.type_descriptor.clone()),
                });
            }
            trace!(name = %name, ty = %t, "re-registering schema");
        } else {
            debug!(name = %name, ty = %t, "registering schema");
        }

        schema.registry_key = Some(name.to_string());
        self.store.insert(
            name.to_string(),
            SchemaEntry::new(name, schema.clone(), t.clone()),
        );

        Ok(())
    }

    /// Derive a key for `t` and register `schema` under it.
    ///
    /// Returns the key, or `None` when the type is unnameable and the schema
    /// should be inlined instead.
    pub fn register_type(&mut self, t: &TypeDescriptor, schema: &mut Schema) -> Result<Option<String>> {
        let name = self.schema_key(t);
        if name.is_empty() {
            trace!(ty = %t, "type has no schema name, leaving inline");
            return Ok(None);
        }

        self.register_schema(&name, t, schema)?;
        Ok(Some(name))
    }

    /// Get an entry by name
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.store.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// All entries, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.store.values()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.store.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Hand the store off for document assembly
    pub fn into_entries(self) -> HashMap<String, SchemaEntry> {
        self.store
    }

    /// `$ref` pointer for a registered name, using the configured prefix
    pub fn reference(&self, name: &str) -> Option<serde_json::Value> {
        self.store
            .get(name)
            .and_then(|entry| entry.schema.reference(&self.config.reference_prefix))
    }

    /// Render the components/schemas map (name -> schema body), sorted by name
    pub fn to_components(&self) -> serde_json::Map<String, serde_json::Value> {
        self.names()
            .into_iter()
            .filter_map(|name| self.store.get(name))
            .map(|entry| (entry.name.clone(), entry.schema.content.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_registry() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_register_schema() {
        let mut registry = SchemaRegistry::new();
        let user = TypeDescriptor::class("User", vec![]);
        let mut schema = Schema::new(json!({ "type": "object" }));

        registry.register_schema("User", &user, &mut schema).unwrap();

        assert_eq!(schema.registry_key(), Some("User"));
        let entry = registry.get("User").unwrap();
        assert_eq!(entry.name, "User");
        assert_eq!(entry.schema.registry_key(), Some("User"));
        assert!(entry.type_descriptor.is_same_type(&user));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = SchemaRegistry::new();
        let user = TypeDescriptor::class("User", vec![]);
        let mut first = Schema::new(json!({ "type": "object", "title": "first" }));
        let mut second = Schema::new(json!({ "type": "object", "title": "second" }));

        registry.register_schema("User", &user, &mut first).unwrap();
        registry.register_schema("User", &user, &mut second).unwrap();

        assert_eq!(first.registry_key(), Some("User"));
        assert_eq!(second.registry_key(), Some("User"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("User").unwrap().schema.content["title"], "second");
    }

    #[test]
    fn test_stored_fragment_is_a_snapshot() {
        let mut registry = SchemaRegistry::new();
        let user = TypeDescriptor::class("User", vec![]);
        let mut schema = Schema::new(json!({ "type": "object" }));

        registry.register_schema("User", &user, &mut schema).unwrap();
        schema.content["title"] = json!("edited later");

        assert_eq!(registry.get("User").unwrap().schema.content, json!({ "type": "object" }));
        assert_eq!(registry.to_components()["User"], json!({ "type": "object" }));
    }

    #[test]
    fn test_name_conflict() {
        let mut registry = SchemaRegistry::new();
        let a = TypeDescriptor::class("Foo", vec![]);
        let b = TypeDescriptor::object_literal(Some("Foo"), vec![]);
        let mut first = Schema::new(json!({ "title": "a" }));
        let mut second = Schema::new(json!({ "title": "b" }));

        registry.register_schema("Foo", &a, &mut first).unwrap();
        let err = registry.register_schema("Foo", &b, &mut second).unwrap_err();

        match err {
            SchemaError::NameConflict { name, new_type, existing_type } => {
                assert_eq!(name, "Foo");
                assert!(new_type.is_same_type(&b));
                assert!(existing_type.is_same_type(&a));
            }
            other => panic!("Expected NameConflict, got {:?}", other),
        }

        assert!(second.registry_key().is_none());
        let entry = registry.get("Foo").unwrap();
        assert!(entry.type_descriptor.is_same_type(&a));
        assert_eq!(entry.schema.content["title"], "a");
    }

    #[test]
    fn test_register_type() {
        let mut registry = SchemaRegistry::new();

        let boxed = TypeDescriptor::class("Box", vec![TypeDescriptor::string()]);
        let mut schema = Schema::new(json!({ "type": "object" }));
        let key = registry.register_type(&boxed, &mut schema).unwrap();
        assert_eq!(key.as_deref(), Some("BoxString"));
        assert!(registry.contains("BoxString"));

        let union = TypeDescriptor::union(vec![TypeDescriptor::string(), TypeDescriptor::number()]);
        let mut inline = Schema::new(json!({ "anyOf": [] }));
        assert_eq!(registry.register_type(&union, &mut inline).unwrap(), None);
        assert!(!inline.is_registered());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_components_and_references() {
        let mut registry = SchemaRegistry::new();
        let mut user = Schema::new(json!({ "type": "object" }));
        let mut email = Schema::new(json!({ "type": "string", "format": "email" }));

        registry
            .register_schema("User", &TypeDescriptor::class("User", vec![]), &mut user)
            .unwrap();
        registry
            .register_schema("Email", &TypeDescriptor::class("Email", vec![]), &mut email)
            .unwrap();

        let components = registry.to_components();
        assert_eq!(components.keys().collect::<Vec<_>>(), vec!["Email", "User"]);
        assert_eq!(components["Email"]["format"], "email");

        assert_eq!(registry.reference("User"), Some(json!({ "$ref": "#/components/schemas/User" })));
        assert_eq!(registry.reference("Missing"), None);
    }

    #[test]
    fn test_custom_reference_prefix() {
        let mut registry = SchemaRegistry::with_config(
            NamingConfig::default(),
            RegistryConfig {
                reference_prefix: "#/definitions/".to_string(),
            },
        );
        let mut schema = Schema::new(json!({}));
        registry
            .register_schema("Node", &TypeDescriptor::class("Node", vec![]), &mut schema)
            .unwrap();

        assert_eq!(registry.reference("Node"), Some(json!({ "$ref": "#/definitions/Node" })));
    }
}
