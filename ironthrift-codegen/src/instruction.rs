//! Abstract write instructions.
//!
//! Instructions are produced, never executed, by the synthesizer. Order is
//! significant: begin and end markers bracket every per-element instruction.

use std::fmt;

use ironthrift_core::WireType;

use crate::access::{AccessExpr, LoopBinding, SizeAccessor, SizeKind};

/// Writer operations that generated code may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriterMethod {
    /// `writeBool(value)`
    WriteBool,
    /// `writeByte(value)`, shared by `byte` and `i8`.
    WriteByte,
    /// `writeI16(value)`
    WriteI16,
    /// `writeI32(value)`
    WriteI32,
    /// `writeI64(value)`
    WriteI64,
    /// `writeDouble(value)`
    WriteDouble,
    /// `writeString(value)`
    WriteString,
    /// `writeBinary(value)`
    WriteBinary,
    /// `writeListBegin(elementType, size)`
    WriteListBegin,
    /// `writeListEnd()`
    WriteListEnd,
    /// `writeSetBegin(elementType, size)`
    WriteSetBegin,
    /// `writeSetEnd()`
    WriteSetEnd,
    /// `writeMapBegin(keyType, valueType, size)`
    WriteMapBegin,
    /// `writeMapEnd()`
    WriteMapEnd,
}

impl WriterMethod {
    /// Returns the method name in the writer contract.
    #[must_use]
    pub const fn contract_name(self) -> &'static str {
        match self {
            Self::WriteBool => "writeBool",
            Self::WriteByte => "writeByte",
            Self::WriteI16 => "writeI16",
            Self::WriteI32 => "writeI32",
            Self::WriteI64 => "writeI64",
            Self::WriteDouble => "writeDouble",
            Self::WriteString => "writeString",
            Self::WriteBinary => "writeBinary",
            Self::WriteListBegin => "writeListBegin",
            Self::WriteListEnd => "writeListEnd",
            Self::WriteSetBegin => "writeSetBegin",
            Self::WriteSetEnd => "writeSetEnd",
            Self::WriteMapBegin => "writeMapBegin",
            Self::WriteMapEnd => "writeMapEnd",
        }
    }

    /// Returns the method name on [`ironthrift_core::ProtocolWriter`].
    #[must_use]
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::WriteBool => "write_bool",
            Self::WriteByte => "write_byte",
            Self::WriteI16 => "write_i16",
            Self::WriteI32 => "write_i32",
            Self::WriteI64 => "write_i64",
            Self::WriteDouble => "write_double",
            Self::WriteString => "write_string",
            Self::WriteBinary => "write_binary",
            Self::WriteListBegin => "write_list_begin",
            Self::WriteListEnd => "write_list_end",
            Self::WriteSetBegin => "write_set_begin",
            Self::WriteSetEnd => "write_set_end",
            Self::WriteMapBegin => "write_map_begin",
            Self::WriteMapEnd => "write_map_end",
        }
    }

    /// Returns the number of arguments the method takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::WriteListEnd | Self::WriteSetEnd | Self::WriteMapEnd => 0,
            Self::WriteListBegin | Self::WriteSetBegin => 2,
            Self::WriteMapBegin => 3,
            _ => 1,
        }
    }

    /// Returns true for methods whose value argument is borrowed bytes.
    #[must_use]
    pub const fn takes_borrowed(self) -> bool {
        matches!(self, Self::WriteString | Self::WriteBinary)
    }
}

impl fmt::Display for WriterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contract_name())
    }
}

/// List-like container kinds sharing one synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `list<T>`
    List,
    /// `set<T>`
    Set,
}

impl ContainerKind {
    /// Begin marker method.
    #[must_use]
    pub const fn begin_method(self) -> WriterMethod {
        match self {
            Self::List => WriterMethod::WriteListBegin,
            Self::Set => WriterMethod::WriteSetBegin,
        }
    }

    /// End marker method.
    #[must_use]
    pub const fn end_method(self) -> WriterMethod {
        match self {
            Self::List => WriterMethod::WriteListEnd,
            Self::Set => WriterMethod::WriteSetEnd,
        }
    }

    /// Size member used for the element count.
    #[must_use]
    pub const fn size_kind(self) -> SizeKind {
        match self {
            Self::List => SizeKind::Length,
            Self::Set => SizeKind::Size,
        }
    }
}

/// Argument passed to a writer method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The value being written.
    Value(AccessExpr),
    /// A wire-type tag.
    WireType(WireType),
    /// A container's element count.
    Size(SizeAccessor),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(access) => write!(f, "{access}"),
            Self::WireType(wire) => write!(f, "{wire}"),
            Self::Size(size) => write!(f, "{size}"),
        }
    }
}

/// Call of one writer method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Invocation {
    /// Method invoked on the writer.
    pub method: WriterMethod,
    /// Arguments in call order.
    pub args: Vec<Argument>,
}

impl Invocation {
    /// Creates an invocation.
    #[must_use]
    pub fn new(method: WriterMethod, args: Vec<Argument>) -> Self {
        Self { method, args }
    }
}

/// Bindings a loop introduces per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopShape {
    /// One binding per list or set element.
    Elements(LoopBinding),
    /// Key and value bindings per map entry.
    Entries {
        /// Key binding.
        key: LoopBinding,
        /// Value binding.
        value: LoopBinding,
    },
}

/// Iteration over a container, running `body` once per element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WriteLoop {
    /// Container iterated, in its own iteration order.
    pub target: AccessExpr,
    /// Per-iteration bindings.
    pub shape: LoopShape,
    /// Instructions executed per element.
    pub body: Vec<WriteInstruction>,
}

/// Abstract statement in a write body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WriteInstruction {
    /// Invoke a writer method.
    Invoke(Invocation),
    /// Loop over a container.
    Loop(WriteLoop),
    /// `target.write(output)`: a struct serializes itself.
    Delegate {
        /// Struct value.
        target: AccessExpr,
    },
}

impl WriteInstruction {
    /// Creates an invocation instruction.
    #[must_use]
    pub fn invoke(method: WriterMethod, args: Vec<Argument>) -> Self {
        Self::Invoke(Invocation::new(method, args))
    }

    /// Returns the writer method for an invocation.
    #[must_use]
    pub const fn method(&self) -> Option<WriterMethod> {
        match self {
            Self::Invoke(invocation) => Some(invocation.method),
            _ => None,
        }
    }
}

/// Lists the contract names of every call in emission order.
///
/// Loop bodies are listed once; delegations appear as `write`.
#[must_use]
pub fn flatten_methods(instructions: &[WriteInstruction]) -> Vec<&'static str> {
    let mut names = Vec::new();
    collect_methods(instructions, &mut names);
    names
}

fn collect_methods(instructions: &[WriteInstruction], names: &mut Vec<&'static str>) {
    for instruction in instructions {
        match instruction {
            WriteInstruction::Invoke(invocation) => names.push(invocation.method.contract_name()),
            WriteInstruction::Loop(write_loop) => collect_methods(&write_loop.body, names),
            WriteInstruction::Delegate { .. } => names.push("write"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_and_rust_names() {
        assert_eq!(WriterMethod::WriteByte.contract_name(), "writeByte");
        assert_eq!(WriterMethod::WriteByte.rust_name(), "write_byte");
        assert_eq!(WriterMethod::WriteMapBegin.rust_name(), "write_map_begin");
        assert_eq!(WriterMethod::WriteBinary.to_string(), "writeBinary");
    }

    #[test]
    fn test_arity() {
        assert_eq!(WriterMethod::WriteI32.arity(), 1);
        assert_eq!(WriterMethod::WriteListBegin.arity(), 2);
        assert_eq!(WriterMethod::WriteMapBegin.arity(), 3);
        assert_eq!(WriterMethod::WriteSetEnd.arity(), 0);
    }

    #[test]
    fn test_container_kind_markers() {
        assert_eq!(ContainerKind::List.begin_method(), WriterMethod::WriteListBegin);
        assert_eq!(ContainerKind::Set.end_method(), WriterMethod::WriteSetEnd);
        assert_eq!(ContainerKind::List.size_kind(), SizeKind::Length);
        assert_eq!(ContainerKind::Set.size_kind(), SizeKind::Size);
    }

    #[test]
    fn test_flatten_methods_walks_loops() {
        let element = LoopBinding::Element { depth: 0 };
        let instructions = vec![
            WriteInstruction::invoke(
                WriterMethod::WriteListBegin,
                vec![
                    Argument::WireType(WireType::Struct),
                    Argument::Size(SizeAccessor::new(AccessExpr::var("xs"), SizeKind::Length)),
                ],
            ),
            WriteInstruction::Loop(WriteLoop {
                target: AccessExpr::var("xs"),
                shape: LoopShape::Elements(element),
                body: vec![WriteInstruction::Delegate {
                    target: element.into(),
                }],
            }),
            WriteInstruction::invoke(WriterMethod::WriteListEnd, Vec::new()),
        ];

        assert_eq!(
            flatten_methods(&instructions),
            vec!["writeListBegin", "write", "writeListEnd"]
        );
        assert_eq!(instructions[0].method(), Some(WriterMethod::WriteListBegin));
        assert_eq!(instructions[1].method(), None);
    }
}
