//! Prelude module for convenient imports.
//!
//! ```
//! use ironthrift::prelude::*;
//! ```

// Runtime
pub use ironthrift_core::{
    BinaryProtocolWriter, Error as CoreError, ProtocolWriter, Record, RecordingWriter,
    Result as CoreResult, Value, WireType, Writable, WriteCall,
};

// Schema
pub use ironthrift_schema::{SchemaError, StructRef, TypeDescriptor, TypeTag, classify};

// Codegen
pub use ironthrift_codegen::{
    AccessExpr, CodegenError, Environment, EvalError, Evaluator, FieldWrite, StructWriteGenerator,
    SynthesizerConfig, WriteBodyRenderer, WriteInstruction, WriteSynthesizer, WriterMethod,
    flatten_methods, generate_write_body, get_write_body,
};
