//! Error types for descriptor classification and validation.

use thiserror::Error;

/// Error type for schema-level checks on type descriptors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A named reference survived normalization.
    #[error("unresolved type reference '{name}'")]
    Unresolved {
        /// Referenced name.
        name: String,
    },

    /// Container nesting is deeper than the configured limit.
    #[error("container nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep {
        /// Actual depth.
        depth: usize,
        /// Configured limit.
        limit: usize,
    },
}

impl SchemaError {
    /// Creates an unresolved reference error.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::Unresolved { name: name.into() }
    }
}
