//! Type descriptor definitions.
//!
//! A [`TypeDescriptor`] is an owned tree: containers own their element, key
//! and value descriptors, while a struct descriptor only names a struct
//! defined elsewhere.

use std::fmt;

/// Reference to a struct definition owned by the surrounding schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructRef {
    /// Struct name.
    pub name: String,
}

impl StructRef {
    /// Creates a struct reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fully resolved schema type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeDescriptor {
    /// Boolean.
    Bool,
    /// 8-bit integer, nominally distinct from `byte`.
    I8,
    /// 8-bit integer.
    Byte,
    /// 16-bit integer.
    I16,
    /// 32-bit integer.
    I32,
    /// 64-bit integer.
    I64,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
    /// Raw bytes.
    Binary,
    /// Ordered sequence.
    List(Box<TypeDescriptor>),
    /// Unordered collection of unique elements.
    Set(Box<TypeDescriptor>),
    /// Key/value map.
    Map {
        /// Key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
    /// Named struct, serialized by its own `write`.
    Struct(StructRef),
    /// Custom or alias reference that was not resolved upstream.
    ///
    /// Never valid input to the generator.
    Named(String),
}

impl TypeDescriptor {
    /// Creates `list<element>`.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    /// Creates `set<element>`.
    #[must_use]
    pub fn set(element: Self) -> Self {
        Self::Set(Box::new(element))
    }

    /// Creates `map<key, value>`.
    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Creates a struct descriptor.
    #[must_use]
    pub fn structure(name: impl Into<String>) -> Self {
        Self::Struct(StructRef::new(name))
    }

    /// Creates an unresolved named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns true for list, set and map.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_) | Self::Map { .. })
    }

    /// Returns true for the leaf scalar types.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::I8
                | Self::Byte
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::Double
                | Self::String
                | Self::Binary
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::I8 => f.write_str("i8"),
            Self::Byte => f.write_str("byte"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::Double => f.write_str("double"),
            Self::String => f.write_str("string"),
            Self::Binary => f.write_str("binary"),
            Self::List(element) => write!(f, "list<{element}>"),
            Self::Set(element) => write!(f, "set<{element}>"),
            Self::Map { key, value } => write!(f, "map<{key},{value}>"),
            Self::Struct(s) => f.write_str(&s.name),
            Self::Named(name) => f.write_str(name),
        }
    }
}
