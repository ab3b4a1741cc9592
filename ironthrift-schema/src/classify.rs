//! Type classification.
//!
//! Maps a descriptor to its semantic [`TypeTag`] and, for container
//! begin markers, to its [`WireType`].

use ironthrift_core::WireType;

use crate::error::SchemaError;
use crate::types::TypeDescriptor;

/// Semantic tag of a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `byte`
    Byte,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `double`
    Double,
    /// `string`
    String,
    /// `binary`
    Binary,
    /// `list`
    List,
    /// `set`
    Set,
    /// `map`
    Map,
    /// `struct`
    Struct,
    /// Unresolved custom or alias type.
    Custom,
}

impl TypeTag {
    /// Returns the IDL name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::Byte => "byte",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Double => "double",
            Self::String => "string",
            Self::Binary => "binary",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Custom => "custom",
        }
    }
}

/// Classifies a descriptor. Total and pure.
#[must_use]
pub fn classify(ty: &TypeDescriptor) -> TypeTag {
    match ty {
        TypeDescriptor::Bool => TypeTag::Bool,
        TypeDescriptor::I8 => TypeTag::I8,
        TypeDescriptor::Byte => TypeTag::Byte,
        TypeDescriptor::I16 => TypeTag::I16,
        TypeDescriptor::I32 => TypeTag::I32,
        TypeDescriptor::I64 => TypeTag::I64,
        TypeDescriptor::Double => TypeTag::Double,
        TypeDescriptor::String => TypeTag::String,
        TypeDescriptor::Binary => TypeTag::Binary,
        TypeDescriptor::List(_) => TypeTag::List,
        TypeDescriptor::Set(_) => TypeTag::Set,
        TypeDescriptor::Map { .. } => TypeTag::Map,
        TypeDescriptor::Struct(_) => TypeTag::Struct,
        TypeDescriptor::Named(_) => TypeTag::Custom,
    }
}

/// Returns the wire type written for `ty` in a container begin marker.
///
/// `i8` shares `Byte` and `binary` shares `String`.
///
/// # Errors
/// Returns [`SchemaError::Unresolved`] for a named reference.
pub fn wire_type_of(ty: &TypeDescriptor) -> Result<WireType, SchemaError> {
    let wire = match ty {
        TypeDescriptor::Bool => WireType::Bool,
        TypeDescriptor::I8 | TypeDescriptor::Byte => WireType::Byte,
        TypeDescriptor::I16 => WireType::I16,
        TypeDescriptor::I32 => WireType::I32,
        TypeDescriptor::I64 => WireType::I64,
        TypeDescriptor::Double => WireType::Double,
        TypeDescriptor::String | TypeDescriptor::Binary => WireType::String,
        TypeDescriptor::List(_) => WireType::List,
        TypeDescriptor::Set(_) => WireType::Set,
        TypeDescriptor::Map { .. } => WireType::Map,
        TypeDescriptor::Struct(_) => WireType::Struct,
        TypeDescriptor::Named(name) => return Err(SchemaError::unresolved(name.clone())),
    };
    Ok(wire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scalars() {
        assert_eq!(classify(&TypeDescriptor::Bool), TypeTag::Bool);
        assert_eq!(classify(&TypeDescriptor::I8), TypeTag::I8);
        assert_eq!(classify(&TypeDescriptor::Byte), TypeTag::Byte);
        assert_eq!(classify(&TypeDescriptor::Binary), TypeTag::Binary);
    }

    #[test]
    fn test_classify_containers_and_struct() {
        assert_eq!(
            classify(&TypeDescriptor::list(TypeDescriptor::I32)),
            TypeTag::List
        );
        assert_eq!(
            classify(&TypeDescriptor::set(TypeDescriptor::I32)),
            TypeTag::Set
        );
        assert_eq!(
            classify(&TypeDescriptor::map(TypeDescriptor::I32, TypeDescriptor::I32)),
            TypeTag::Map
        );
        assert_eq!(
            classify(&TypeDescriptor::structure("Point")),
            TypeTag::Struct
        );
        assert_eq!(classify(&TypeDescriptor::named("UserId")), TypeTag::Custom);
    }

    #[test]
    fn test_wire_type_collapses() {
        assert_eq!(wire_type_of(&TypeDescriptor::I8).unwrap(), WireType::Byte);
        assert_eq!(wire_type_of(&TypeDescriptor::Byte).unwrap(), WireType::Byte);
        assert_eq!(
            wire_type_of(&TypeDescriptor::Binary).unwrap(),
            WireType::String
        );
        assert_eq!(
            wire_type_of(&TypeDescriptor::structure("P")).unwrap(),
            WireType::Struct
        );
    }

    #[test]
    fn test_wire_type_of_named_fails() {
        let err = wire_type_of(&TypeDescriptor::named("UserId")).unwrap_err();
        assert!(matches!(err, SchemaError::Unresolved { ref name } if name == "UserId"));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(TypeTag::I8.name(), "i8");
        assert_eq!(TypeTag::Custom.name(), "custom");
    }
}
