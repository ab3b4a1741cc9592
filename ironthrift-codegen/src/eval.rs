//! Direct evaluation of write instructions.
//!
//! The [`Evaluator`] runs an instruction sequence against a live
//! [`ProtocolWriter`], reading operands from an [`Environment`] of
//! [`Value`]s. It produces the same call sequence the rendered Rust code
//! would, which makes it useful for testing and for dynamic serialization.

use std::collections::HashMap;

use ironthrift_core::{ProtocolWriter, Value, WireType, Writable};
use tracing::{debug, trace};

use crate::access::{AccessExpr, LoopBinding};
use crate::error::EvalError;
use crate::instruction::{Argument, Invocation, LoopShape, WriteInstruction, WriteLoop, WriterMethod};

/// Values visible to evaluated instructions, keyed by access path.
///
/// Keys are the rendered access expression: `xs` for a variable,
/// `self.items` for a field.
#[derive(Debug, Default)]
pub struct Environment<'v> {
    values: HashMap<String, &'v Value>,
}

impl<'v> Environment<'v> {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value to an access path such as `xs` or `self.items`.
    pub fn bind(&mut self, path: impl Into<String>, value: &'v Value) -> &mut Self {
        self.values.insert(path.into(), value);
        self
    }

    /// Binds a value to the path of an access expression.
    pub fn bind_access(&mut self, access: &AccessExpr, value: &'v Value) -> &mut Self {
        self.bind(access.to_string(), value)
    }

    /// Looks up a path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'v Value> {
        self.values.get(path).copied()
    }
}

/// Executes write instructions against a protocol writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates an evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes `instructions` in order.
    ///
    /// # Errors
    /// Returns `EvalError::Unbound` for an access with no value,
    /// `EvalError::TypeMismatch` when a value has the wrong shape for its
    /// instruction, `EvalError::Arity` for a malformed invocation, or
    /// `EvalError::Protocol` when the writer fails. Calls already made
    /// before the error are not rolled back.
    pub fn execute<'v>(
        &self,
        instructions: &[WriteInstruction],
        env: &Environment<'v>,
        output: &mut dyn ProtocolWriter,
    ) -> Result<(), EvalError> {
        debug!(count = instructions.len(), "evaluating write instructions");
        let mut scope = Scope {
            env,
            bindings: HashMap::new(),
        };
        scope.run(instructions, output)
    }
}

struct Scope<'e, 'v> {
    env: &'e Environment<'v>,
    bindings: HashMap<LoopBinding, &'v Value>,
}

impl<'v> Scope<'_, 'v> {
    fn run(
        &mut self,
        instructions: &[WriteInstruction],
        output: &mut dyn ProtocolWriter,
    ) -> Result<(), EvalError> {
        for instruction in instructions {
            match instruction {
                WriteInstruction::Invoke(invocation) => self.invoke(invocation, output)?,
                WriteInstruction::Loop(write_loop) => self.iterate(write_loop, output)?,
                WriteInstruction::Delegate { target } => match self.resolve(target)? {
                    Value::Struct(inner) => inner.write(output)?,
                    other => return Err(mismatch("struct", other)),
                },
            }
        }
        Ok(())
    }

    fn resolve(&self, access: &AccessExpr) -> Result<&'v Value, EvalError> {
        let found = match access {
            AccessExpr::Bound(binding) => self.bindings.get(binding).copied(),
            _ => self.env.get(&access.to_string()),
        };
        found.ok_or_else(|| EvalError::Unbound {
            name: access.to_string(),
        })
    }

    fn iterate(&mut self, write_loop: &WriteLoop, output: &mut dyn ProtocolWriter) -> Result<(), EvalError> {
        let target = self.resolve(&write_loop.target)?;
        match (write_loop.shape, target) {
            (LoopShape::Elements(binding), Value::List(items) | Value::Set(items)) => {
                for item in items {
                    self.bindings.insert(binding, item);
                    self.run(&write_loop.body, output)?;
                }
                self.bindings.remove(&binding);
            }
            (LoopShape::Entries { key, value }, Value::Map(entries)) => {
                for (k, v) in entries {
                    self.bindings.insert(key, k);
                    self.bindings.insert(value, v);
                    self.run(&write_loop.body, output)?;
                }
                self.bindings.remove(&key);
                self.bindings.remove(&value);
            }
            (LoopShape::Elements(_), other) => return Err(mismatch("list or set", other)),
            (LoopShape::Entries { .. }, other) => return Err(mismatch("map", other)),
        }
        Ok(())
    }

    fn invoke(&self, invocation: &Invocation, output: &mut dyn ProtocolWriter) -> Result<(), EvalError> {
        let method = invocation.method;
        let args = invocation.args.as_slice();
        if args.len() != method.arity() {
            return Err(EvalError::Arity {
                method: method.contract_name(),
                expected: method.arity(),
                found: args.len(),
            });
        }
        trace!(method = method.contract_name(), "invoke");

        match method {
            WriterMethod::WriteBool => match self.value(&args[0])? {
                Value::Bool(v) => output.write_bool(*v)?,
                other => return Err(mismatch("bool", other)),
            },
            WriterMethod::WriteByte => match self.value(&args[0])? {
                Value::Byte(v) => output.write_byte(*v)?,
                other => return Err(mismatch("byte", other)),
            },
            WriterMethod::WriteI16 => match self.value(&args[0])? {
                Value::I16(v) => output.write_i16(*v)?,
                other => return Err(mismatch("i16", other)),
            },
            WriterMethod::WriteI32 => match self.value(&args[0])? {
                Value::I32(v) => output.write_i32(*v)?,
                other => return Err(mismatch("i32", other)),
            },
            WriterMethod::WriteI64 => match self.value(&args[0])? {
                Value::I64(v) => output.write_i64(*v)?,
                other => return Err(mismatch("i64", other)),
            },
            WriterMethod::WriteDouble => match self.value(&args[0])? {
                Value::Double(v) => output.write_double(*v)?,
                other => return Err(mismatch("double", other)),
            },
            WriterMethod::WriteString => match self.value(&args[0])? {
                Value::String(v) => output.write_string(v)?,
                other => return Err(mismatch("string", other)),
            },
            WriterMethod::WriteBinary => match self.value(&args[0])? {
                Value::Binary(v) => output.write_binary(v)?,
                other => return Err(mismatch("binary", other)),
            },
            WriterMethod::WriteListBegin => {
                output.write_list_begin(wire_type(&args[0])?, self.size(&args[1])?)?;
            }
            WriterMethod::WriteSetBegin => {
                output.write_set_begin(wire_type(&args[0])?, self.size(&args[1])?)?;
            }
            WriterMethod::WriteMapBegin => {
                output.write_map_begin(
                    wire_type(&args[0])?,
                    wire_type(&args[1])?,
                    self.size(&args[2])?,
                )?;
            }
            WriterMethod::WriteListEnd => output.write_list_end()?,
            WriterMethod::WriteSetEnd => output.write_set_end()?,
            WriterMethod::WriteMapEnd => output.write_map_end()?,
        }
        Ok(())
    }

    fn value(&self, arg: &Argument) -> Result<&'v Value, EvalError> {
        match arg {
            Argument::Value(access) => self.resolve(access),
            other => Err(EvalError::TypeMismatch {
                expected: "value",
                found: argument_kind(other),
            }),
        }
    }

    fn size(&self, arg: &Argument) -> Result<usize, EvalError> {
        match arg {
            Argument::Size(size) => {
                let target = self.resolve(&size.target)?;
                target.len().ok_or_else(|| mismatch("container", target))
            }
            other => Err(EvalError::TypeMismatch {
                expected: "size",
                found: argument_kind(other),
            }),
        }
    }
}

fn wire_type(arg: &Argument) -> Result<WireType, EvalError> {
    match arg {
        Argument::WireType(wire) => Ok(*wire),
        other => Err(EvalError::TypeMismatch {
            expected: "wire type",
            found: argument_kind(other),
        }),
    }
}

const fn argument_kind(arg: &Argument) -> &'static str {
    match arg {
        Argument::Value(_) => "value",
        Argument::WireType(_) => "wire type",
        Argument::Size(_) => "size",
    }
}

fn mismatch(expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}
