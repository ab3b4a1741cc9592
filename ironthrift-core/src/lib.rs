//! # IronThrift Core
//!
//! Runtime contract shared by the code generator and the code it emits.
//!
//! This crate provides:
//! - The [`WireType`] tag enumeration used in container begin markers
//! - The [`ProtocolWriter`] writer interface and the [`Writable`] struct capability
//! - A Thrift binary protocol writer ([`BinaryProtocolWriter`])
//! - A dynamic [`Value`] model for evaluating write instructions
//! - Error types for write operations

pub mod binary;
pub mod error;
pub mod protocol;
pub mod value;
pub mod wire;

pub use binary::BinaryProtocolWriter;
pub use error::{Error, Result};
pub use protocol::{ProtocolWriter, RecordingWriter, Writable, WriteCall};
pub use value::{Record, Value};
pub use wire::WireType;
