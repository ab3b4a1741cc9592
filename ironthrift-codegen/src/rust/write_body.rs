//! Rust rendering of write instructions.
//!
//! Generated bodies target [`ironthrift_core::ProtocolWriter`] through the
//! configured writer identifier:
//!
//! ```text
//! output.write_list_begin(ironthrift::WireType::I32, xs.len())?;
//! for __elem_0 in xs.iter() {
//!     output.write_i32(*__elem_0)?;
//! }
//! output.write_list_end()?;
//! ```
//!
//! Struct delegation goes through the runtime's `Writable` trait path, so
//! generated code needs no trait imports. Accesses may name owned values or
//! references: loops call `.iter()` and `Writable` is implemented for `&T`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::access::AccessExpr;
use crate::config::{SynthesizerConfig, parse_plain_ident, parse_var_ident};
use crate::error::CodegenError;
use crate::instruction::{Argument, Invocation, LoopShape, WriteInstruction, WriteLoop, WriterMethod};

/// A rendered access: either a place expression or a reference binding.
enum Rendered {
    /// Variable or field, e.g. `self.items`.
    Place(TokenStream),
    /// Loop binding holding `&T`.
    Ref(TokenStream),
}

impl Rendered {
    fn expr(&self) -> &TokenStream {
        match self {
            Self::Place(tokens) | Self::Ref(tokens) => tokens,
        }
    }

    /// Iterator over the target. Method-call autoderef accepts owned
    /// collections and references alike.
    fn iter(&self) -> TokenStream {
        let expr = self.expr();
        quote! { #expr.iter() }
    }

    /// Borrowed form, used for delegation.
    fn borrowed(&self) -> TokenStream {
        match self {
            Self::Place(place) => quote! { &#place },
            Self::Ref(binding) => binding.clone(),
        }
    }

    fn scalar_arg(&self, method: WriterMethod) -> TokenStream {
        match (self, method.takes_borrowed()) {
            (Self::Place(place), true) => quote! { &#place },
            (Self::Place(place), false) => place.clone(),
            (Self::Ref(binding), true) => binding.clone(),
            (Self::Ref(binding), false) => quote! { *#binding },
        }
    }
}

/// Renders instruction sequences into Rust statements.
pub struct WriteBodyRenderer<'a> {
    config: &'a SynthesizerConfig,
}

impl<'a> WriteBodyRenderer<'a> {
    /// Creates a renderer using the given identifiers.
    #[must_use]
    pub fn new(config: &'a SynthesizerConfig) -> Self {
        Self { config }
    }

    /// Renders a sequence of instructions as statements.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if an access expression
    /// holds a name that is not a valid Rust identifier or uses the reserved
    /// loop-binding prefix.
    pub fn render(&self, instructions: &[WriteInstruction]) -> Result<TokenStream, CodegenError> {
        let mut output = TokenStream::new();
        for instruction in instructions {
            output.extend(self.render_instruction(instruction)?);
        }
        Ok(output)
    }

    fn render_instruction(&self, instruction: &WriteInstruction) -> Result<TokenStream, CodegenError> {
        match instruction {
            WriteInstruction::Invoke(invocation) => self.render_invocation(invocation),
            WriteInstruction::Loop(write_loop) => self.render_loop(write_loop),
            WriteInstruction::Delegate { target } => {
                let writer = self.config.writer_ident();
                let runtime = self.config.runtime_path();
                let target = render_access(target)?.borrowed();
                Ok(quote! { #runtime::Writable::write(#target, #writer)?; })
            }
        }
    }

    fn render_invocation(&self, invocation: &Invocation) -> Result<TokenStream, CodegenError> {
        let writer = self.config.writer_ident();
        let method = format_ident!("{}", invocation.method.rust_name());
        let args = invocation
            .args
            .iter()
            .map(|arg| self.render_argument(arg, invocation.method))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! { #writer.#method(#(#args),*)?; })
    }

    fn render_argument(&self, arg: &Argument, method: WriterMethod) -> Result<TokenStream, CodegenError> {
        match arg {
            Argument::Value(access) => Ok(render_access(access)?.scalar_arg(method)),
            Argument::WireType(wire) => {
                let path = self.config.wire_type_path();
                let variant = format_ident!("{}", wire.variant_name());
                Ok(quote! { #path::#variant })
            }
            Argument::Size(size) => {
                // `length` and `size` both read the element count.
                let target = render_access(&size.target)?;
                let target = target.expr();
                Ok(quote! { #target.len() })
            }
        }
    }

    fn render_loop(&self, write_loop: &WriteLoop) -> Result<TokenStream, CodegenError> {
        let iterable = render_access(&write_loop.target)?.iter();
        let pattern = match write_loop.shape {
            LoopShape::Elements(element) => {
                let element = format_ident!("{}", element.ident());
                quote! { #element }
            }
            LoopShape::Entries { key, value } => {
                let key = format_ident!("{}", key.ident());
                let value = format_ident!("{}", value.ident());
                quote! { (#key, #value) }
            }
        };
        let body = self.render(&write_loop.body)?;

        Ok(quote! {
            for #pattern in #iterable {
                #body
            }
        })
    }
}

fn render_access(access: &AccessExpr) -> Result<Rendered, CodegenError> {
    match access {
        AccessExpr::Var(name) => {
            let ident = parse_var_ident(name)?;
            Ok(Rendered::Place(quote! { #ident }))
        }
        AccessExpr::Field { base, name } => {
            let base = render_access(base)?;
            let base = base.expr();
            let field = parse_plain_ident(name)?;
            Ok(Rendered::Place(quote! { #base.#field }))
        }
        AccessExpr::Bound(binding) => {
            let ident = format_ident!("{}", binding.ident());
            Ok(Rendered::Ref(quote! { #ident }))
        }
    }
}
