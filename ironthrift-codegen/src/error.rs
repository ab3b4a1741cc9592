//! Error types for code generation and instruction evaluation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant is a generation-time failure: the enclosing synthesis is
/// abandoned and no partial output is returned.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The descriptor has no write synthesizer, typically an alias or custom
    /// type that escaped normalization.
    #[error("unsupported type '{type_name}': not implemented by the write synthesizer")]
    UnsupportedType {
        /// Offending type.
        type_name: String,
    },

    /// Container nesting exceeds the configured limit.
    #[error("container nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep {
        /// Depth reached.
        depth: usize,
        /// Configured limit.
        limit: usize,
    },

    /// An identifier or path cannot be used in generated code.
    #[error("invalid identifier '{ident}': {reason}")]
    InvalidIdentifier {
        /// Offending identifier.
        ident: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] ironthrift_schema::SchemaError),
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_ident(ident: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            ident: ident.into(),
            reason: reason.into(),
        }
    }
}

/// Error type for evaluating instructions against a live writer.
#[derive(Debug, Error)]
pub enum EvalError {
    /// An access expression refers to nothing in scope.
    #[error("unbound access expression '{name}'")]
    Unbound {
        /// Rendered access expression.
        name: String,
    },

    /// A value does not have the shape the instruction expects.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected value kind.
        expected: &'static str,
        /// Actual value kind.
        found: &'static str,
    },

    /// An invocation carries the wrong arguments for its method.
    #[error("malformed call to {method}: expected {expected} arguments, found {found}")]
    Arity {
        /// Method contract name.
        method: &'static str,
        /// Expected argument count.
        expected: usize,
        /// Actual argument count.
        found: usize,
    },

    /// The writer rejected a call.
    #[error("protocol error: {0}")]
    Protocol(#[from] ironthrift_core::Error),
}
