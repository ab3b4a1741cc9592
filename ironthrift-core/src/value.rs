//! Dynamic in-memory values.
//!
//! [`Value`] stands in for the typed fields of generated structs when write
//! instructions are evaluated rather than compiled. Container variants keep
//! their elements in a `Vec`, so iteration order is the stored order: the
//! insertion order for lists and maps, and whatever order the caller chose
//! for sets.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::protocol::{ProtocolWriter, Writable};
use crate::wire::WireType;

/// A dynamically typed value.
#[derive(Clone)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// 8-bit integer (`byte` or `i8`).
    Byte(i8),
    /// 16-bit integer.
    I16(i16),
    /// 32-bit integer.
    I32(i32),
    /// 64-bit integer.
    I64(i64),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Raw bytes.
    Binary(Vec<u8>),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Set, iterated in stored order.
    Set(Vec<Value>),
    /// Map entries in insertion order.
    Map(Vec<(Value, Value)>),
    /// A struct that serializes itself.
    Struct(Arc<dyn Writable + Send + Sync>),
}

impl Value {
    /// Wraps a struct value.
    #[must_use]
    pub fn structure(value: impl Writable + Send + Sync + 'static) -> Self {
        Self::Struct(Arc::new(value))
    }

    /// Returns a short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Byte(_) => "byte",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Binary(_) => "binary",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
        }
    }

    /// Returns the element count for containers, `None` otherwise.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::List(items) | Self::Set(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns the wire type this value would be tagged with.
    #[must_use]
    pub const fn wire_type(&self) -> WireType {
        match self {
            Self::Bool(_) => WireType::Bool,
            Self::Byte(_) => WireType::Byte,
            Self::I16(_) => WireType::I16,
            Self::I32(_) => WireType::I32,
            Self::I64(_) => WireType::I64,
            Self::Double(_) => WireType::Double,
            Self::String(_) | Self::Binary(_) => WireType::String,
            Self::List(_) => WireType::List,
            Self::Set(_) => WireType::Set,
            Self::Map(_) => WireType::Map,
            Self::Struct(_) => WireType::Struct,
        }
    }

    /// Writes the value without a schema, inferring container element
    /// types from the first element (`Void` when empty).
    ///
    /// # Errors
    /// Returns any error raised by the writer.
    pub fn write_untyped(&self, output: &mut dyn ProtocolWriter) -> Result<()> {
        match self {
            Self::Bool(v) => output.write_bool(*v),
            Self::Byte(v) => output.write_byte(*v),
            Self::I16(v) => output.write_i16(*v),
            Self::I32(v) => output.write_i32(*v),
            Self::I64(v) => output.write_i64(*v),
            Self::Double(v) => output.write_double(*v),
            Self::String(v) => output.write_string(v),
            Self::Binary(v) => output.write_binary(v),
            Self::List(items) => {
                output.write_list_begin(element_wire_type(items.first()), items.len())?;
                for item in items {
                    item.write_untyped(output)?;
                }
                output.write_list_end()
            }
            Self::Set(items) => {
                output.write_set_begin(element_wire_type(items.first()), items.len())?;
                for item in items {
                    item.write_untyped(output)?;
                }
                output.write_set_end()
            }
            Self::Map(entries) => {
                let first = entries.first();
                output.write_map_begin(
                    element_wire_type(first.map(|(k, _)| k)),
                    element_wire_type(first.map(|(_, v)| v)),
                    entries.len(),
                )?;
                for (key, value) in entries {
                    key.write_untyped(output)?;
                    value.write_untyped(output)?;
                }
                output.write_map_end()
            }
            Self::Struct(inner) => inner.write(output),
        }
    }
}

fn element_wire_type(first: Option<&Value>) -> WireType {
    first.map_or(WireType::Void, Value::wire_type)
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Byte(v) => f.debug_tuple("Byte").field(v).finish(),
            Self::I16(v) => f.debug_tuple("I16").field(v).finish(),
            Self::I32(v) => f.debug_tuple("I32").field(v).finish(),
            Self::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Binary(v) => f.debug_tuple("Binary").field(v).finish(),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Set(v) => f.debug_tuple("Set").field(v).finish(),
            Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Self::Struct(_) => f.write_str("Struct(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// Minimal named struct whose `write` emits its field values in order.
///
/// Stands in for a generated struct serializer when exercising delegation.
#[derive(Debug, Clone)]
pub struct Record {
    /// Struct name.
    pub name: String,
    /// Field values keyed by field id, in declaration order.
    pub fields: Vec<(i16, Value)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, id: i16, value: impl Into<Value>) -> Self {
        self.fields.push((id, value.into()));
        self
    }
}

impl Writable for Record {
    fn write(&self, output: &mut dyn ProtocolWriter) -> Result<()> {
        for (_, value) in &self.fields {
            value.write_untyped(output)?;
        }
        Ok(())
    }
}
