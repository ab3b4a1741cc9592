//! # IronThrift Schema
//!
//! Resolved type descriptors and the type classifier.
//!
//! This crate provides:
//! - The [`TypeDescriptor`] tree handed to the code generator
//! - Type classification ([`classify`]) and wire-type lookup ([`wire_type_of`])
//! - Descriptor validation (resolved-ness and nesting depth)
//!
//! Parsing IDL text and resolving typedefs happen upstream; everything here
//! assumes descriptors that are already normalized.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`TypeDescriptor`] and
//!   [`StructRef`]. The `ironthrift` facade enables it for its tests, so
//!   workspace test runs cover the serde paths here as well.

pub mod classify;
pub mod error;
pub mod types;
pub mod validation;

pub use classify::{TypeTag, classify, wire_type_of};
pub use error::SchemaError;
pub use types::{StructRef, TypeDescriptor};
pub use validation::{nesting_depth, validate_descriptor};
