//! `Writable` impl generation for record types.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::debug;

use ironthrift_schema::TypeDescriptor;

use super::WriteBodyRenderer;
use crate::access::AccessExpr;
use crate::config::parse_plain_ident;
use crate::error::CodegenError;
use crate::synth::WriteSynthesizer;

/// A field of a generated record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWrite {
    /// Field name as it appears on `self`.
    pub name: String,
    /// Declared field type.
    pub ty: TypeDescriptor,
}

impl FieldWrite {
    /// Creates a new field description.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Generates `impl Writable` blocks from field lists.
pub struct StructWriteGenerator<'a> {
    synthesizer: &'a WriteSynthesizer,
}

impl<'a> StructWriteGenerator<'a> {
    /// Creates a generator backed by the given synthesizer.
    #[must_use]
    pub fn new(synthesizer: &'a WriteSynthesizer) -> Self {
        Self { synthesizer }
    }

    /// Generates the `Writable` implementation for `struct_name`.
    ///
    /// Fields are written in declaration order.
    ///
    /// # Errors
    /// Returns the first synthesis or rendering error; no partial impl is
    /// produced.
    pub fn generate(
        &self,
        struct_name: &str,
        fields: &[FieldWrite],
    ) -> Result<TokenStream, CodegenError> {
        let config = self.synthesizer.config();
        let renderer = WriteBodyRenderer::new(config);
        let name = parse_plain_ident(struct_name)?;
        let runtime = config.runtime_path();

        let mut body = TokenStream::new();
        for field in fields {
            let access = AccessExpr::self_field(field.name.as_str());
            let instructions = self.synthesizer.synthesize_write(&field.ty, &access)?;
            body.extend(renderer.render(&instructions)?);
        }

        let writer = if fields.is_empty() {
            format_ident!("_{}", config.writer_ident())
        } else {
            config.writer_ident().clone()
        };

        debug!(struct_name, fields = fields.len(), "generated Writable impl");

        Ok(quote! {
            impl #runtime::Writable for #name {
                fn write(&self, #writer: &mut dyn #runtime::ProtocolWriter) -> #runtime::Result<()> {
                    #body
                    Ok(())
                }
            }
        })
    }
}
