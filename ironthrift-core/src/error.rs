//! Error types for IronThrift core operations.

use thiserror::Error;

/// Core error type for protocol write operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A length or element count does not fit the wire's signed 32-bit size field.
    #[error("{kind} size {size} exceeds the maximum of {max}", max = i32::MAX)]
    SizeOverflow {
        /// What was being sized (string, binary, list, set, map).
        kind: &'static str,
        /// Offending size.
        size: usize,
    },
}

/// Result type alias for IronThrift core operations.
pub type Result<T> = std::result::Result<T, Error>;
