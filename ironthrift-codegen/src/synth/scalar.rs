//! Scalar write synthesis.

use ironthrift_schema::TypeTag;
use tracing::error;

use super::WriteSynthesizer;
use crate::access::AccessExpr;
use crate::error::CodegenError;
use crate::instruction::{Argument, WriteInstruction, WriterMethod};

/// Returns the writer method for a scalar tag, or `None` for non-scalars.
///
/// `i8` and `byte` both lower to `writeByte`: the protocol has no separate
/// 8-bit opcode for `i8`.
#[must_use]
pub const fn scalar_method(tag: TypeTag) -> Option<WriterMethod> {
    match tag {
        TypeTag::Bool => Some(WriterMethod::WriteBool),
        TypeTag::I16 => Some(WriterMethod::WriteI16),
        TypeTag::I32 => Some(WriterMethod::WriteI32),
        TypeTag::I64 => Some(WriterMethod::WriteI64),
        TypeTag::Double => Some(WriterMethod::WriteDouble),
        TypeTag::String => Some(WriterMethod::WriteString),
        TypeTag::Binary => Some(WriterMethod::WriteBinary),
        TypeTag::Byte | TypeTag::I8 => Some(WriterMethod::WriteByte),
        TypeTag::List | TypeTag::Set | TypeTag::Map | TypeTag::Struct | TypeTag::Custom => None,
    }
}

impl WriteSynthesizer {
    /// Synthesizes the single instruction writing a scalar.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` if `tag` is not a scalar.
    pub fn synthesize_scalar_write(
        &self,
        tag: TypeTag,
        access: &AccessExpr,
    ) -> Result<WriteInstruction, CodegenError> {
        let method = scalar_method(tag).ok_or_else(|| {
            error!(tag = tag.name(), "no scalar writer for tag");
            CodegenError::unsupported(tag.name())
        })?;
        Ok(WriteInstruction::invoke(
            method,
            vec![Argument::Value(access.clone())],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironthrift_schema::TypeDescriptor;

    use crate::synth::get_write_body;

    #[test]
    fn test_scalar_table() {
        let cases = [
            (TypeDescriptor::Bool, "writeBool"),
            (TypeDescriptor::I16, "writeI16"),
            (TypeDescriptor::I32, "writeI32"),
            (TypeDescriptor::I64, "writeI64"),
            (TypeDescriptor::Double, "writeDouble"),
            (TypeDescriptor::String, "writeString"),
            (TypeDescriptor::Binary, "writeBinary"),
            (TypeDescriptor::Byte, "writeByte"),
            (TypeDescriptor::I8, "writeByte"),
        ];

        for (ty, expected) in cases {
            let out = get_write_body(&ty, &AccessExpr::var("v")).unwrap();
            assert_eq!(out.len(), 1, "{ty}");
            let method = out[0].method().unwrap();
            assert_eq!(method.contract_name(), expected, "{ty}");
        }
    }

    #[test]
    fn test_scalar_argument_is_access() {
        let access = AccessExpr::self_field("flag");
        let instruction = WriteSynthesizer::default()
            .synthesize_scalar_write(TypeTag::Bool, &access)
            .unwrap();
        assert_eq!(
            instruction,
            WriteInstruction::invoke(WriterMethod::WriteBool, vec![Argument::Value(access)])
        );
    }

    #[test]
    fn test_non_scalar_tags_rejected() {
        for tag in [TypeTag::List, TypeTag::Set, TypeTag::Map, TypeTag::Struct, TypeTag::Custom] {
            assert!(scalar_method(tag).is_none());
            let err = WriteSynthesizer::default()
                .synthesize_scalar_write(tag, &AccessExpr::var("v"))
                .unwrap_err();
            assert!(matches!(err, CodegenError::UnsupportedType { .. }));
        }
    }
}
