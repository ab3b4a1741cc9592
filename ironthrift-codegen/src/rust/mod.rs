//! Rust code generation from write instructions.

mod structs;
mod write_body;

pub use structs::{FieldWrite, StructWriteGenerator};
pub use write_body::WriteBodyRenderer;
