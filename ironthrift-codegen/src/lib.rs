//! # IronThrift Codegen
//!
//! Write-instruction synthesis for IDL types.
//!
//! This crate provides:
//! - A type-directed synthesizer turning a [`TypeDescriptor`] and an access
//!   expression into ordered [`WriteInstruction`]s
//! - Rust rendering of instructions and `Writable` impls
//! - An [`Evaluator`] that runs instructions against a live writer
//!
//! [`TypeDescriptor`]: ironthrift_schema::TypeDescriptor

pub mod access;
pub mod config;
pub mod error;
pub mod eval;
pub mod instruction;
pub mod rust;
pub mod synth;

pub use access::{AccessExpr, LoopBinding, SizeAccessor, SizeKind};
pub use config::{SynthesizerConfig, SynthesizerConfigBuilder};
pub use error::{CodegenError, EvalError};
pub use eval::{Environment, Evaluator};
pub use instruction::{
    Argument, ContainerKind, Invocation, LoopShape, WriteInstruction, WriteLoop, WriterMethod,
    flatten_methods,
};
pub use rust::{FieldWrite, StructWriteGenerator, WriteBodyRenderer};
pub use synth::{WriteSynthesizer, get_write_body, scalar_method};

use ironthrift_schema::TypeDescriptor;
use proc_macro2::TokenStream;

/// Synthesizes and renders the Rust statements writing `access` as `ty`,
/// using the default configuration.
///
/// # Errors
/// Returns `CodegenError` if synthesis or rendering fails.
pub fn generate_write_body(
    ty: &TypeDescriptor,
    access: &AccessExpr,
) -> Result<TokenStream, CodegenError> {
    let synthesizer = WriteSynthesizer::default();
    let instructions = synthesizer.synthesize_write(ty, access)?;
    WriteBodyRenderer::new(synthesizer.config()).render(&instructions)
}
