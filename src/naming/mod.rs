//! Schema Name Derivation
//!
//! Maps a type descriptor to the key it is stored under in the
//! components/schemas section. The mapping is a pure function of the
//! descriptor's structure and annotations:
//!
//! - value primitives keep their canonical keyword (`string`, `number`,
//!   `boolean`, `bigint`, `null`, `undefined`) and literals their rendering
//!   (`"on"`, `42`)
//! - classes and object literals compose their name with their type
//!   arguments in PascalCase (`Box<string>` -> `BoxString`), unless pinned by
//!   an `openapi("name", ...)` annotation
//! - arrays append `Array` to the element key in camelCase (`string[]` -> `stringArray`)
//! - everything else (unions, intersections, tuples, functions, and the
//!   keyword types `any`, `unknown`, `never`, `void`, `symbol`) gets the empty
//!   string and must be inlined by the caller

pub mod case;
pub mod config;

pub use case::{compose, CaseMode};
pub use config::NamingConfig;

use tracing::trace;

use crate::types::{TypeDescriptor, TypeKind};

/// Derives schema keys from type descriptors
#[derive(Debug, Clone, Default)]
pub struct KeyDeriver {
    config: NamingConfig,
}

impl KeyDeriver {
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Derive the schema key for `t`, or `""` if the type is unnameable
    pub fn derive_key(&self, t: &TypeDescriptor) -> String {
        let key = match &t.kind {
            TypeKind::Primitive { primitive } if primitive.has_schema_key() => t.to_string(),
            TypeKind::Literal { .. } => t.to_string(),
            TypeKind::Class { .. } | TypeKind::ObjectLiteral { .. } => self.derive_named_key(t),
            TypeKind::Array { element } => {
                let element_key = self.derive_key(element);
                compose(&[element_key.as_str(), self.config.array_suffix.as_str()], CaseMode::Camel)
            }
            TypeKind::Primitive { .. }
            | TypeKind::Union { .. }
            | TypeKind::Intersection { .. }
            | TypeKind::Tuple { .. }
            | TypeKind::Function { .. }
            | TypeKind::Other { .. } => String::new(),
        };

        trace!(ty = %t, key = %key, "derived schema key");
        key
    }

    /// Derive the key for a class or object literal.
    ///
    /// Any other kind yields `""`.
    pub fn derive_named_key(&self, t: &TypeDescriptor) -> String {
        let (root_name, arguments) = match &t.kind {
            TypeKind::Class { name, arguments } => (name.as_str(), arguments.as_slice()),
            TypeKind::ObjectLiteral { name, arguments } => {
                (name.as_deref().unwrap_or(""), arguments.as_slice())
            }
            _ => return String::new(),
        };

        if let Some(name) = self.override_name(t) {
            return name;
        }

        let mut segments = Vec::with_capacity(arguments.len() + 1);
        segments.push(root_name.to_string());
        segments.extend(arguments.iter().map(|arg| self.derive_key(arg)));

        compose(&segments, CaseMode::Pascal)
    }

    /// The pinned name from an override annotation, if `t` carries one.
    ///
    /// Only the exact shape `[<override_option>, <literal>]` counts; anything
    /// else falls through to structural derivation.
    pub fn override_name(&self, t: &TypeDescriptor) -> Option<String> {
        let annotation = t.annotation(&self.config.override_annotation)?;

        let option = annotation.option(0)?.as_str()?;
        if option != self.config.override_option {
            return None;
        }

        annotation.option(1).map(ToString::to_string)
    }
}

/// Derive a schema key with the default naming configuration
pub fn derive_key(t: &TypeDescriptor) -> String {
    KeyDeriver::default().derive_key(t)
}
