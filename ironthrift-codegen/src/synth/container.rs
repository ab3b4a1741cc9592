//! Container write synthesis.
//!
//! Lists, sets and maps all lower to the same three-part shape:
//!
//! ```text
//! begin(tags..., size)
//! for each element { <element instructions> }
//! end()
//! ```

use ironthrift_core::WireType;
use ironthrift_schema::{SchemaError, TypeDescriptor, wire_type_of};
use tracing::debug;

use super::{WriteSynthesizer, unsupported};
use crate::access::{AccessExpr, LoopBinding, SizeAccessor, SizeKind};
use crate::error::CodegenError;
use crate::instruction::{
    Argument, ContainerKind, LoopShape, WriteInstruction, WriteLoop, WriterMethod,
};

impl WriteSynthesizer {
    /// Synthesizes a list or set write.
    ///
    /// # Errors
    /// See [`WriteSynthesizer::synthesize_write`].
    pub fn synthesize_list_or_set_write(
        &self,
        kind: ContainerKind,
        element: &TypeDescriptor,
        access: &AccessExpr,
    ) -> Result<Vec<WriteInstruction>, CodegenError> {
        self.list_or_set_at(kind, element, access, 0)
    }

    /// Synthesizes a map write.
    ///
    /// # Errors
    /// See [`WriteSynthesizer::synthesize_write`].
    pub fn synthesize_map_write(
        &self,
        key: &TypeDescriptor,
        value: &TypeDescriptor,
        access: &AccessExpr,
    ) -> Result<Vec<WriteInstruction>, CodegenError> {
        self.map_at(key, value, access, 0)
    }

    pub(super) fn list_or_set_at(
        &self,
        kind: ContainerKind,
        element: &TypeDescriptor,
        access: &AccessExpr,
        depth: usize,
    ) -> Result<Vec<WriteInstruction>, CodegenError> {
        self.check_depth(depth)?;
        let element_wire = element_wire_type(element)?;

        let binding = LoopBinding::Element { depth };
        let body = self.dispatch(element, &binding.into(), depth + 1)?;
        debug!(?kind, %element, %access, depth, "synthesized container write");

        Ok(vec![
            WriteInstruction::invoke(
                kind.begin_method(),
                vec![
                    Argument::WireType(element_wire),
                    Argument::Size(SizeAccessor::new(access.clone(), kind.size_kind())),
                ],
            ),
            WriteInstruction::Loop(WriteLoop {
                target: access.clone(),
                shape: LoopShape::Elements(binding),
                body,
            }),
            WriteInstruction::invoke(kind.end_method(), Vec::new()),
        ])
    }

    pub(super) fn map_at(
        &self,
        key: &TypeDescriptor,
        value: &TypeDescriptor,
        access: &AccessExpr,
        depth: usize,
    ) -> Result<Vec<WriteInstruction>, CodegenError> {
        self.check_depth(depth)?;
        let key_wire = element_wire_type(key)?;
        let value_wire = element_wire_type(value)?;

        let key_binding = LoopBinding::Key { depth };
        let value_binding = LoopBinding::Value { depth };

        // Key before value: the wire interleaves them per entry.
        let mut body = self.dispatch(key, &key_binding.into(), depth + 1)?;
        body.extend(self.dispatch(value, &value_binding.into(), depth + 1)?);
        debug!(%key, %value, %access, depth, "synthesized map write");

        Ok(vec![
            WriteInstruction::invoke(
                WriterMethod::WriteMapBegin,
                vec![
                    Argument::WireType(key_wire),
                    Argument::WireType(value_wire),
                    Argument::Size(SizeAccessor::new(access.clone(), SizeKind::Size)),
                ],
            ),
            WriteInstruction::Loop(WriteLoop {
                target: access.clone(),
                shape: LoopShape::Entries {
                    key: key_binding,
                    value: value_binding,
                },
                body,
            }),
            WriteInstruction::invoke(WriterMethod::WriteMapEnd, Vec::new()),
        ])
    }

    /// Entering a container at loop depth `depth` makes its nesting level `depth + 1`.
    fn check_depth(&self, depth: usize) -> Result<(), CodegenError> {
        match self.config().max_depth() {
            Some(limit) if depth + 1 > limit => Err(CodegenError::NestingTooDeep {
                depth: depth + 1,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

fn element_wire_type(ty: &TypeDescriptor) -> Result<WireType, CodegenError> {
    wire_type_of(ty).map_err(|e| match e {
        SchemaError::Unresolved { .. } => unsupported(ty),
        other => other.into(),
    })
}
