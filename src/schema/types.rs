//! Schema types

use serde::{Deserialize, Serialize};

/// Target-independent type of a generated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum FieldType {
    String,
    Bool,
    Integer,
    Float,
    /// Untyped value (empty arrays, nested arrays)
    Any,
    /// Reference to another generated declaration
    Named(String),
    Array(Box<FieldType>),
    /// Observed as `null`; holds the type used in its place
    Nullable(Box<FieldType>),
}

impl FieldType {
    /// Create an array type
    pub fn array_of(item: FieldType) -> Self {
        FieldType::Array(Box::new(item))
    }

    /// Create a reference to a named declaration
    pub fn named(name: impl Into<String>) -> Self {
        FieldType::Named(name.into())
    }

    /// Wrap a type whose sample value was `null`
    pub fn nullable(inner: FieldType) -> Self {
        FieldType::Nullable(Box::new(inner))
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Bool => write!(f, "boolean"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
            FieldType::Any => write!(f, "any"),
            FieldType::Named(name) => write!(f, "{name}"),
            FieldType::Array(item) => write!(f, "array of {item}"),
            FieldType::Nullable(inner) => write!(f, "nullable {inner}"),
        }
    }
}

/// One field of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Exported identifier
    pub name: String,
    /// Field type
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Original JSON key, used as the encoding tag
    pub key: String,
}

impl FieldDescriptor {
    /// Create a new field descriptor
    pub fn new(name: impl Into<String>, ty: FieldType, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            key: key.into(),
        }
    }
}

/// A named type declaration with its fields in processing order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Declaration {
    /// Create an empty declaration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field
    pub fn push(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Check whether a field identifier is already used
    pub fn has_field_name(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}
