//! Wire-type tags.
//!
//! Every resolved schema type maps to exactly one [`WireType`]. The tags are
//! written by container begin markers so a reader knows how to decode the
//! elements that follow.

use std::fmt;

/// Thrift binary protocol type codes.
///
/// `i8` has no code of its own and travels as [`WireType::Byte`]; `binary`
/// shares [`WireType::String`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WireType {
    /// End of a struct's field list.
    Stop = 0,
    /// No value.
    Void = 1,
    /// Boolean.
    Bool = 2,
    /// 8-bit signed integer (`byte` and `i8`).
    Byte = 3,
    /// 64-bit float.
    Double = 4,
    /// 16-bit signed integer.
    I16 = 6,
    /// 32-bit signed integer.
    I32 = 8,
    /// 64-bit signed integer.
    I64 = 10,
    /// Length-prefixed bytes (`string` and `binary`).
    String = 11,
    /// Nested struct.
    Struct = 12,
    /// Map.
    Map = 13,
    /// Set.
    Set = 14,
    /// List.
    List = 15,
}

impl WireType {
    /// All wire types in code order.
    pub const ALL: [Self; 13] = [
        Self::Stop,
        Self::Void,
        Self::Bool,
        Self::Byte,
        Self::Double,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::String,
        Self::Struct,
        Self::Map,
        Self::Set,
        Self::List,
    ];

    /// Returns the one-byte code written on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a wire type by its code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Returns the constant name used in generated code, e.g. `I32`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::Void => "VOID",
            Self::Bool => "BOOL",
            Self::Byte => "BYTE",
            Self::Double => "DOUBLE",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::String => "STRING",
            Self::Struct => "STRUCT",
            Self::Map => "MAP",
            Self::Set => "SET",
            Self::List => "LIST",
        }
    }

    /// Returns the Rust variant name, e.g. `I32` or `String`.
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::Void => "Void",
            Self::Bool => "Bool",
            Self::Byte => "Byte",
            Self::Double => "Double",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::String => "String",
            Self::Struct => "Struct",
            Self::Map => "Map",
            Self::Set => "Set",
            Self::List => "List",
        }
    }

    /// Returns true for list, set and map.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
