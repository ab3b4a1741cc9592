//! Struct write synthesis.
//!
//! Struct fields are never enumerated here; the struct's own `write` does
//! that. Self-referential schemas therefore cannot recurse through this
//! module.

use super::WriteSynthesizer;
use crate::access::AccessExpr;
use crate::instruction::WriteInstruction;

impl WriteSynthesizer {
    /// Synthesizes `access.write(output)`.
    #[must_use]
    pub fn synthesize_struct_write(&self, access: &AccessExpr) -> WriteInstruction {
        WriteInstruction::Delegate {
            target: access.clone(),
        }
    }
}
