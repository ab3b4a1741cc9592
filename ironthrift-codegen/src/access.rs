//! Access expressions.
//!
//! An [`AccessExpr`] names "the value currently being written". The
//! synthesizer never looks inside one; it only threads it through and
//! introduces loop bindings for container elements.

use std::fmt;

/// Prefix reserved for loop bindings in generated code.
pub const RESERVED_PREFIX: &str = "__";

/// Reference to a value being serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessExpr {
    /// A local variable or parameter, e.g. `xs` or `self`.
    Var(String),
    /// A field of another access, e.g. `self.items`.
    Field {
        /// Owning value.
        base: Box<AccessExpr>,
        /// Field name.
        name: String,
    },
    /// A loop-bound temporary introduced by the container synthesizer.
    Bound(LoopBinding),
}

impl AccessExpr {
    /// Creates a variable access.
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Creates a field access on `self`.
    #[must_use]
    pub fn self_field(name: impl Into<String>) -> Self {
        Self::var("self").field(name)
    }

    /// Creates a field access on this expression.
    #[must_use]
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::Field {
            base: Box::new(self),
            name: name.into(),
        }
    }

    /// Returns true if this is a loop binding.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }
}

impl fmt::Display for AccessExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => f.write_str(name),
            Self::Field { base, name } => write!(f, "{base}.{name}"),
            Self::Bound(binding) => f.write_str(&binding.ident()),
        }
    }
}

/// A loop-scoped binding.
///
/// Identity is the loop nesting depth alone, so two syntheses of equal
/// inputs produce equal bindings, and an inner loop (greater depth) can
/// never shadow the binding of an enclosing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopBinding {
    /// Element of a list or set.
    Element {
        /// Loop nesting depth.
        depth: usize,
    },
    /// Key of a map entry.
    Key {
        /// Loop nesting depth.
        depth: usize,
    },
    /// Value of a map entry.
    Value {
        /// Loop nesting depth.
        depth: usize,
    },
}

impl LoopBinding {
    /// Returns the loop depth of this binding.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Element { depth } | Self::Key { depth } | Self::Value { depth } => depth,
        }
    }

    /// Returns the identifier used in generated code.
    #[must_use]
    pub fn ident(self) -> String {
        match self {
            Self::Element { depth } => format!("{RESERVED_PREFIX}elem_{depth}"),
            Self::Key { depth } => format!("{RESERVED_PREFIX}key_{depth}"),
            Self::Value { depth } => format!("{RESERVED_PREFIX}value_{depth}"),
        }
    }
}

impl From<LoopBinding> for AccessExpr {
    fn from(binding: LoopBinding) -> Self {
        Self::Bound(binding)
    }
}

/// How a container exposes its element count.
///
/// Both kinds mean "number of elements"; only the member name differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeKind {
    /// Ordered sequences (`length`).
    Length,
    /// Sets and maps (`size`).
    Size,
}

impl SizeKind {
    /// Returns the member name in the writer contract.
    #[must_use]
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Size => "size",
        }
    }
}

/// Element count of a container access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SizeAccessor {
    /// Container being measured.
    pub target: AccessExpr,
    /// Member used to read the count.
    pub kind: SizeKind,
}

impl SizeAccessor {
    /// Creates a size accessor.
    #[must_use]
    pub fn new(target: AccessExpr, kind: SizeKind) -> Self {
        Self { target, kind }
    }
}

impl fmt::Display for SizeAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target, self.kind.member_name())
    }
}
