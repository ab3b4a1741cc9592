//! Write-instruction synthesis.
//!
//! [`WriteSynthesizer::synthesize_write`] is the dispatcher: it classifies a
//! descriptor and routes it to the scalar, container or struct synthesizer,
//! recursing into element, key and value types. Every call is a pure
//! function of its inputs.

mod container;
mod scalar;
mod structure;

pub use scalar::scalar_method;

use ironthrift_schema::{TypeDescriptor, classify};
use tracing::{error, trace};

use crate::access::AccessExpr;
use crate::config::SynthesizerConfig;
use crate::error::CodegenError;
use crate::instruction::{ContainerKind, WriteInstruction};

/// Turns type descriptors into ordered write instructions.
#[derive(Debug, Clone, Default)]
pub struct WriteSynthesizer {
    config: SynthesizerConfig,
}

impl WriteSynthesizer {
    /// Creates a synthesizer with the given configuration.
    #[must_use]
    pub fn new(config: SynthesizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Synthesizes the instructions that write `access` as a value of `ty`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` naming the offending
    /// descriptor if any part of `ty` is unresolved, or
    /// `CodegenError::NestingTooDeep` if a configured depth limit is
    /// exceeded. No partial output is produced.
    pub fn synthesize_write(
        &self,
        ty: &TypeDescriptor,
        access: &AccessExpr,
    ) -> Result<Vec<WriteInstruction>, CodegenError> {
        self.dispatch(ty, access, 0)
    }

    /// Dispatches at a given loop depth.
    pub(crate) fn dispatch(
        &self,
        ty: &TypeDescriptor,
        access: &AccessExpr,
        depth: usize,
    ) -> Result<Vec<WriteInstruction>, CodegenError> {
        trace!(%ty, %access, depth, "synthesizing write");

        match ty {
            TypeDescriptor::List(element) => {
                self.list_or_set_at(ContainerKind::List, element, access, depth)
            }
            TypeDescriptor::Set(element) => {
                self.list_or_set_at(ContainerKind::Set, element, access, depth)
            }
            TypeDescriptor::Map { key, value } => self.map_at(key, value, access, depth),
            TypeDescriptor::Struct(_) => Ok(vec![self.synthesize_struct_write(access)]),
            TypeDescriptor::Named(_) => Err(unsupported(ty)),
            TypeDescriptor::Bool
            | TypeDescriptor::I8
            | TypeDescriptor::Byte
            | TypeDescriptor::I16
            | TypeDescriptor::I32
            | TypeDescriptor::I64
            | TypeDescriptor::Double
            | TypeDescriptor::String
            | TypeDescriptor::Binary => Ok(vec![self.synthesize_scalar_write(classify(ty), access)?]),
        }
    }
}

/// Synthesizes a write body with the default configuration.
///
/// # Errors
/// See [`WriteSynthesizer::synthesize_write`].
pub fn get_write_body(
    ty: &TypeDescriptor,
    access: &AccessExpr,
) -> Result<Vec<WriteInstruction>, CodegenError> {
    WriteSynthesizer::default().synthesize_write(ty, access)
}

/// Builds and logs the error for a descriptor with no synthesizer.
pub(crate) fn unsupported(ty: &TypeDescriptor) -> CodegenError {
    error!(%ty, "unsupported type reached the write synthesizer");
    CodegenError::unsupported(ty.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::LoopBinding;
    use crate::instruction::{LoopShape, WriterMethod, flatten_methods};

    #[test]
    fn test_scalar_dispatch_yields_one_instruction() {
        let out = get_write_body(&TypeDescriptor::I64, &AccessExpr::var("n")).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method(), Some(WriterMethod::WriteI64));
    }

    #[test]
    fn test_named_type_is_unsupported() {
        let err = get_write_body(&TypeDescriptor::named("UserId"), &AccessExpr::var("id"))
            .unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedType { ref type_name } if type_name == "UserId"));
    }

    #[test]
    fn test_nested_named_type_aborts_whole_synthesis() {
        let ty = TypeDescriptor::list(TypeDescriptor::map(
            TypeDescriptor::String,
            TypeDescriptor::list(TypeDescriptor::named("Alias")),
        ));
        let err = get_write_body(&ty, &AccessExpr::var("xs")).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedType { ref type_name } if type_name == "Alias"));
    }

    #[test]
    fn test_idempotent() {
        let ty = TypeDescriptor::map(
            TypeDescriptor::String,
            TypeDescriptor::list(TypeDescriptor::structure("Point")),
        );
        let access = AccessExpr::self_field("points");
        let first = get_write_body(&ty, &access).unwrap();
        let second = get_write_body(&ty, &access).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_loops_use_distinct_bindings() {
        let ty = TypeDescriptor::list(TypeDescriptor::list(TypeDescriptor::I32));
        let out = get_write_body(&ty, &AccessExpr::var("grid")).unwrap();

        let WriteInstruction::Loop(outer) = &out[1] else {
            panic!("expected outer loop");
        };
        let WriteInstruction::Loop(inner) = &outer.body[1] else {
            panic!("expected inner loop");
        };
        assert_eq!(outer.shape, LoopShape::Elements(LoopBinding::Element { depth: 0 }));
        assert_eq!(inner.shape, LoopShape::Elements(LoopBinding::Element { depth: 1 }));
        assert_eq!(inner.target, AccessExpr::Bound(LoopBinding::Element { depth: 0 }));
        assert_eq!(
            flatten_methods(&out),
            vec![
                "writeListBegin",
                "writeListBegin",
                "writeI32",
                "writeListEnd",
                "writeListEnd"
            ]
        );
    }

    #[test]
    fn test_depth_limit() {
        let config = SynthesizerConfig::builder().max_depth(Some(1)).build().unwrap();
        let synthesizer = WriteSynthesizer::new(config);

        let shallow = TypeDescriptor::list(TypeDescriptor::I32);
        assert!(synthesizer.synthesize_write(&shallow, &AccessExpr::var("a")).is_ok());

        let deep = TypeDescriptor::list(TypeDescriptor::set(TypeDescriptor::I32));
        let err = synthesizer
            .synthesize_write(&deep, &AccessExpr::var("a"))
            .unwrap_err();
        assert!(matches!(err, CodegenError::NestingTooDeep { depth: 2, limit: 1 }));
    }
}
