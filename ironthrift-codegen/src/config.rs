//! Synthesizer configuration.
//!
//! Supplies the pre-bound names generated code refers to (the writer
//! parameter, the wire-type enum and the runtime crate) and an optional
//! bound on container nesting.

use proc_macro2::Ident;
use syn::Path;
use syn::ext::IdentExt;
use syn::parse::Parser;

use crate::access::RESERVED_PREFIX;
use crate::error::CodegenError;

/// Default name of the writer parameter.
pub const DEFAULT_WRITER_IDENT: &str = "output";

/// Default path of the wire-type enum.
pub const DEFAULT_WIRE_TYPE_PATH: &str = "ironthrift::WireType";

/// Default path of the runtime crate.
pub const DEFAULT_RUNTIME_PATH: &str = "ironthrift";

/// Validated configuration shared by the synthesizer and the renderer.
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    writer_ident: Ident,
    wire_type_path: Path,
    runtime_path: Path,
    max_depth: Option<usize>,
}

impl SynthesizerConfig {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> SynthesizerConfigBuilder {
        SynthesizerConfigBuilder::new()
    }

    /// Writer parameter identifier.
    #[must_use]
    pub fn writer_ident(&self) -> &Ident {
        &self.writer_ident
    }

    /// Wire-type enum path.
    #[must_use]
    pub fn wire_type_path(&self) -> &Path {
        &self.wire_type_path
    }

    /// Runtime crate path.
    #[must_use]
    pub fn runtime_path(&self) -> &Path {
        &self.runtime_path
    }

    /// Container nesting limit, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            writer_ident: Ident::new(DEFAULT_WRITER_IDENT, proc_macro2::Span::call_site()),
            wire_type_path: syn::parse_quote!(ironthrift::WireType),
            runtime_path: syn::parse_quote!(ironthrift),
            max_depth: None,
        }
    }
}

/// Builder for [`SynthesizerConfig`].
#[derive(Debug, Clone)]
pub struct SynthesizerConfigBuilder {
    writer_ident: String,
    wire_type_path: String,
    runtime_path: String,
    max_depth: Option<usize>,
}

impl SynthesizerConfigBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer_ident: DEFAULT_WRITER_IDENT.to_string(),
            wire_type_path: DEFAULT_WIRE_TYPE_PATH.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            max_depth: None,
        }
    }

    /// Sets the writer parameter name.
    #[must_use]
    pub fn writer_ident(mut self, ident: impl Into<String>) -> Self {
        self.writer_ident = ident.into();
        self
    }

    /// Sets the wire-type enum path.
    #[must_use]
    pub fn wire_type_path(mut self, path: impl Into<String>) -> Self {
        self.wire_type_path = path.into();
        self
    }

    /// Sets the runtime crate path.
    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Sets the container nesting limit. `None` disables the check.
    #[must_use]
    pub fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if the writer name is not a
    /// plain identifier or uses the reserved loop-binding prefix, or if a
    /// path does not parse.
    pub fn build(self) -> Result<SynthesizerConfig, CodegenError> {
        if self.writer_ident.starts_with(RESERVED_PREFIX) {
            return Err(CodegenError::invalid_ident(
                &self.writer_ident,
                format!("the '{RESERVED_PREFIX}' prefix is reserved for loop bindings"),
            ));
        }
        let writer_ident = syn::parse_str::<Ident>(&self.writer_ident)
            .map_err(|e| CodegenError::invalid_ident(&self.writer_ident, e.to_string()))?;
        let wire_type_path = parse_path(&self.wire_type_path)?;
        let runtime_path = parse_path(&self.runtime_path)?;

        Ok(SynthesizerConfig {
            writer_ident,
            wire_type_path,
            runtime_path,
            max_depth: self.max_depth,
        })
    }
}

impl Default for SynthesizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_path(path: &str) -> Result<Path, CodegenError> {
    syn::parse_str::<Path>(path).map_err(|e| CodegenError::invalid_ident(path, e.to_string()))
}

/// Parses a variable name. `self` is the only keyword accepted.
pub(crate) fn parse_var_ident(name: &str) -> Result<Ident, CodegenError> {
    if name.starts_with(RESERVED_PREFIX) {
        return Err(CodegenError::invalid_ident(
            name,
            format!("the '{RESERVED_PREFIX}' prefix is reserved for loop bindings"),
        ));
    }
    if name == "self" {
        return Ident::parse_any
            .parse_str(name)
            .map_err(|e| CodegenError::invalid_ident(name, e.to_string()));
    }
    parse_plain_ident(name)
}

/// Parses a field or type name, rejecting keywords.
pub(crate) fn parse_plain_ident(name: &str) -> Result<Ident, CodegenError> {
    syn::parse_str::<Ident>(name).map_err(|e| CodegenError::invalid_ident(name, e.to_string()))
}
