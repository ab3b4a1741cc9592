//! # IronThrift
//!
//! Type-directed write-instruction synthesis for Thrift-style IDL types.
//!
//! Given a declared field type and an expression naming where the value
//! lives, IronThrift produces the ordered calls that serialize the value
//! through a [`ProtocolWriter`]. The result can be rendered into Rust
//! source or evaluated directly against a writer.
//!
//! ## Quick Start
//!
//! ```
//! use ironthrift::prelude::*;
//!
//! let ty = TypeDescriptor::list(TypeDescriptor::I32);
//! let access = AccessExpr::var("xs");
//!
//! let instructions = get_write_body(&ty, &access).unwrap();
//! assert_eq!(
//!     flatten_methods(&instructions),
//!     ["writeListBegin", "writeI32", "writeListEnd"]
//! );
//!
//! let xs = Value::List(vec![Value::I32(7)]);
//! let mut env = Environment::new();
//! env.bind("xs", &xs);
//!
//! let mut output = BinaryProtocolWriter::new();
//! Evaluator::new().execute(&instructions, &env, &mut output).unwrap();
//! assert_eq!(output.as_slice(), &[8, 0, 0, 0, 1, 0, 0, 0, 7]);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Wire types, the writer interface, binary protocol writer, values
//! - [`schema`] - Type descriptors, classification and validation
//! - [`codegen`] - Synthesis, Rust rendering and evaluation
//!
//! Generated code refers to `ironthrift::WireType`, `ironthrift::Writable`,
//! `ironthrift::ProtocolWriter` and `ironthrift::Result`, all re-exported at
//! the crate root.

pub mod prelude;

/// Runtime contract: wire types, writers and values.
pub mod core {
    pub use ironthrift_core::*;
}

/// Type descriptors and classification.
pub mod schema {
    pub use ironthrift_schema::*;
}

/// Write-instruction synthesis and code generation.
pub mod codegen {
    pub use ironthrift_codegen::*;
}

pub use ironthrift_core::{
    BinaryProtocolWriter, Error, ProtocolWriter, Result, Value, WireType, Writable,
};
