//! Type descriptors
//!
//! Structural descriptions of types as handed over by the introspection layer.
//! A descriptor is a closed sum over the kinds the naming pass cares about,
//! plus an explicit family of "other" kinds that never receive a schema name.
//!
//! Descriptors are plain data: they serialize as JSON tagged by `kind`, so a
//! reflection front-end can pass them across a process boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Literals
// =============================================================================

/// A literal value, used both as a literal type and as an annotation option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Arbitrary-precision integers are carried as their decimal text
    BigInt(String),
}

impl LiteralValue {
    /// The string payload, if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the literal's bare value (no quotes)
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => f.write_str(s),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::BigInt(digits) => f.write_str(digits),
        }
    }
}

// =============================================================================
// Annotations
// =============================================================================

/// A named annotation attached to a type, e.g. `openapi("name", "Foo")`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub options: Vec<LiteralValue>,
}

impl Annotation {
    pub fn new(name: impl Into<String>, options: Vec<LiteralValue>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Option at `index`, if present
    pub fn option(&self, index: usize) -> Option<&LiteralValue> {
        self.options.get(index)
    }
}

/// Ordered set of annotations on a type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// First annotation with the given name
    pub fn get(&self, name: &str) -> Option<&Annotation> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.0.push(annotation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Kinds
// =============================================================================

/// Primitive types, named by their canonical keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Null,
    Undefined,
    Any,
    Unknown,
    Never,
    Void,
}

impl PrimitiveKind {
    /// Whether this primitive names a schema.
    ///
    /// Value-carrying primitives (`string`, `number`, `boolean`, `bigint`,
    /// `null`, `undefined`) do. The keyword-only types `symbol`, `any`,
    /// `unknown`, `never` and `void` do not.
    pub fn has_schema_key(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::String
                | PrimitiveKind::Number
                | PrimitiveKind::Boolean
                | PrimitiveKind::BigInt
                | PrimitiveKind::Null
                | PrimitiveKind::Undefined
        )
    }

    /// Canonical textual name, e.g. `"string"`
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::BigInt => "bigint",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Any => "any",
            PrimitiveKind::Unknown => "unknown",
            PrimitiveKind::Never => "never",
            PrimitiveKind::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    Primitive {
        primitive: PrimitiveKind,
    },

    /// A declared class, possibly generic
    Class {
        name: String,
        #[serde(default)]
        arguments: Vec<TypeDescriptor>,
    },

    /// An object literal / interface / type alias, possibly anonymous
    ObjectLiteral {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        arguments: Vec<TypeDescriptor>,
    },

    Array {
        element: Box<TypeDescriptor>,
    },

    Literal {
        literal: LiteralValue,
    },

    Union {
        members: Vec<TypeDescriptor>,
    },

    Intersection {
        members: Vec<TypeDescriptor>,
    },

    Tuple {
        elements: Vec<TypeDescriptor>,
    },

    Function {
        #[serde(default)]
        parameters: Vec<TypeDescriptor>,
        return_type: Box<TypeDescriptor>,
    },

    /// Anything else the introspection layer reports, labelled by its kind
    Other {
        label: String,
    },
}

// =============================================================================
// Type Descriptor
// =============================================================================

/// A structural type description plus its annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(flatten)]
    pub kind: TypeKind,

    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
}

impl TypeDescriptor {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            annotations: Annotations::new(),
        }
    }

    pub fn primitive(primitive: PrimitiveKind) -> Self {
        Self::new(TypeKind::Primitive { primitive })
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn number() -> Self {
        Self::primitive(PrimitiveKind::Number)
    }

    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub fn class(name: impl Into<String>, arguments: Vec<TypeDescriptor>) -> Self {
        Self::new(TypeKind::Class {
            name: name.into(),
            arguments,
        })
    }

    pub fn object_literal(name: Option<&str>, arguments: Vec<TypeDescriptor>) -> Self {
        Self::new(TypeKind::ObjectLiteral {
            name: name.map(String::from),
            arguments,
        })
    }

    pub fn array(element: TypeDescriptor) -> Self {
        Self::new(TypeKind::Array {
            element: Box::new(element),
        })
    }

    pub fn literal(literal: LiteralValue) -> Self {
        Self::new(TypeKind::Literal { literal })
    }

    pub fn union(members: Vec<TypeDescriptor>) -> Self {
        Self::new(TypeKind::Union { members })
    }

    pub fn intersection(members: Vec<TypeDescriptor>) -> Self {
        Self::new(TypeKind::Intersection { members })
    }

    pub fn tuple(elements: Vec<TypeDescriptor>) -> Self {
        Self::new(TypeKind::Tuple { elements })
    }

    pub fn function(parameters: Vec<TypeDescriptor>, return_type: TypeDescriptor) -> Self {
        Self::new(TypeKind::Function {
            parameters,
            return_type: Box::new(return_type),
        })
    }

    /// Attach an annotation (builder style)
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Pin the schema name with an `openapi("name", <name>)` annotation
    pub fn named(self, name: impl Into<String>) -> Self {
        self.with_annotation(Annotation::new(
            "openapi",
            vec![
                LiteralValue::String("name".to_string()),
                LiteralValue::String(name.into()),
            ],
        ))
    }

    /// Look up an annotation by name
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.get(name)
    }

    /// Structural equality: same shape, names, and arguments.
    ///
    /// Annotations are naming metadata and are not compared.
    pub fn is_same_type(&self, other: &TypeDescriptor) -> bool {
        use TypeKind::*;

        match (&self.kind, &other.kind) {
            (Primitive { primitive: a }, Primitive { primitive: b }) => a == b,
            (
                Class { name: a, arguments: args_a },
                Class { name: b, arguments: args_b },
            ) => a == b && all_same(args_a, args_b),
            (
                ObjectLiteral { name: a, arguments: args_a },
                ObjectLiteral { name: b, arguments: args_b },
            ) => a == b && all_same(args_a, args_b),
            (Array { element: a }, Array { element: b }) => a.is_same_type(b),
            (Literal { literal: a }, Literal { literal: b }) => a == b,
            (Union { members: a }, Union { members: b })
            | (Intersection { members: a }, Intersection { members: b })
            | (Tuple { elements: a }, Tuple { elements: b }) => all_same(a, b),
            (
                Function { parameters: params_a, return_type: ret_a },
                Function { parameters: params_b, return_type: ret_b },
            ) => all_same(params_a, params_b) && ret_a.is_same_type(ret_b),
            (Other { label: a }, Other { label: b }) => a == b,
            _ => false,
        }
    }
}

fn all_same(a: &[TypeDescriptor], b: &[TypeDescriptor]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_same_type(y))
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TypeDescriptor], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_generic(f: &mut fmt::Formatter<'_>, name: &str, arguments: &[TypeDescriptor]) -> fmt::Result {
    f.write_str(name)?;
    if !arguments.is_empty() {
        f.write_str("<")?;
        write_list(f, arguments, ", ")?;
        f.write_str(">")?;
    }
    Ok(())
}

/// TypeScript-flavoured rendering for diagnostics
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Primitive { primitive } => write!(f, "{}", primitive),
            TypeKind::Class { name, arguments } => write_generic(f, name, arguments),
            TypeKind::ObjectLiteral { name, arguments } => {
                write_generic(f, name.as_deref().unwrap_or("{...}"), arguments)
            }
            TypeKind::Array { element } => match element.kind {
                TypeKind::Union { .. } | TypeKind::Intersection { .. } | TypeKind::Function { .. } => {
                    write!(f, "({})[]", element)
                }
                _ => write!(f, "{}[]", element),
            },
            TypeKind::Literal { literal } => match literal {
                LiteralValue::String(s) => write!(f, "{:?}", s),
                LiteralValue::BigInt(digits) => write!(f, "{}n", digits),
                other => write!(f, "{}", other),
            },
            TypeKind::Union { members } => write_list(f, members, " | "),
            TypeKind::Intersection { members } => write_list(f, members, " & "),
            TypeKind::Tuple { elements } => {
                f.write_str("[")?;
                write_list(f, elements, ", ")?;
                f.write_str("]")
            }
            TypeKind::Function { parameters, return_type } => {
                f.write_str("(")?;
                write_list(f, parameters, ", ")?;
                write!(f, ") => {}", return_type)
            }
            TypeKind::Other { label } => f.write_str(label),
        }
    }
}
