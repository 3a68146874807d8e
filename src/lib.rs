//! Familiar Schema Names
//!
//! Assigns stable, collision-checked names to type descriptors so they can be
//! used as keys in the components/schemas section of a generated OpenAPI
//! document.
//!
//! ## Features
//!
//! - **Deterministic Names**: Keys are a pure function of a type's structure
//!   (`Box<string>` -> `BoxString`, `string[]` -> `stringArray`)
//! - **Explicit Overrides**: `openapi("name", "Foo")` pins a type's name
//! - **Conflict Detection**: A name is bound to exactly one structural type
//! - **Back-References**: Registered fragments remember their name for `$ref`s
//!
//! ## Flow
//!
//! ```text
//! TypeDescriptor ──KeyDeriver──▶ "BoxString" ──register_schema──▶ SchemaRegistry
//!                                    │                                 │
//!                                    └── "" (inline) ◀─────────────────┴── NameConflict
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod registry;
pub mod schema;
pub mod types;

pub use config::{RegistryConfig, SchemaNamesConfig};
pub use error::{Result, SchemaError};
pub use naming::{compose, derive_key, CaseMode, KeyDeriver, NamingConfig};
pub use registry::SchemaRegistry;
pub use schema::{Schema, SchemaEntry};
pub use types::{Annotation, Annotations, LiteralValue, PrimitiveKind, TypeDescriptor, TypeKind};
