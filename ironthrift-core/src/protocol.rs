//! Writer interface targeted by generated serialization code.
//!
//! [`ProtocolWriter`] is the complete set of operations a write body may
//! invoke. Structs are never unfolded by the generator; they are reached
//! through [`Writable::write`], which receives the same writer.

use crate::error::Result;
use crate::wire::WireType;

/// Synchronous sink for protocol write operations.
///
/// The trait is object safe so generated `write` methods can accept
/// `&mut dyn ProtocolWriter` and nested structs can share one writer.
///
/// # Binary asymmetry
/// `binary` values are written with [`ProtocolWriter::write_binary`], but
/// their bytes are framed exactly like strings. A paired reader decodes
/// them with its string-read operation; it must not expect a dedicated
/// binary opcode.
pub trait ProtocolWriter {
    /// Writes a boolean.
    fn write_bool(&mut self, value: bool) -> Result<()>;

    /// Writes an 8-bit integer. Used for both `byte` and `i8`.
    fn write_byte(&mut self, value: i8) -> Result<()>;

    /// Writes a 16-bit integer.
    fn write_i16(&mut self, value: i16) -> Result<()>;

    /// Writes a 32-bit integer.
    fn write_i32(&mut self, value: i32) -> Result<()>;

    /// Writes a 64-bit integer.
    fn write_i64(&mut self, value: i64) -> Result<()>;

    /// Writes a 64-bit float.
    fn write_double(&mut self, value: f64) -> Result<()>;

    /// Writes a UTF-8 string.
    fn write_string(&mut self, value: &str) -> Result<()>;

    /// Writes raw bytes. See the trait docs for the read-side asymmetry.
    fn write_binary(&mut self, value: &[u8]) -> Result<()>;

    /// Begins a list of `size` elements of type `element`.
    fn write_list_begin(&mut self, element: WireType, size: usize) -> Result<()>;

    /// Ends a list.
    fn write_list_end(&mut self) -> Result<()>;

    /// Begins a set of `size` elements of type `element`.
    fn write_set_begin(&mut self, element: WireType, size: usize) -> Result<()>;

    /// Ends a set.
    fn write_set_end(&mut self) -> Result<()>;

    /// Begins a map of `size` entries.
    fn write_map_begin(&mut self, key: WireType, value: WireType, size: usize) -> Result<()>;

    /// Ends a map.
    fn write_map_end(&mut self) -> Result<()>;
}

/// Struct-level `write` capability.
///
/// Implemented by every generated struct. Generated code delegates through
/// `Writable::write(&value, output)`, so references, boxes and `Arc`s of a
/// writable type are writable too.
pub trait Writable {
    /// Serializes `self` through `output`.
    ///
    /// # Errors
    /// Returns any error raised by the writer.
    fn write(&self, output: &mut dyn ProtocolWriter) -> Result<()>;
}

impl<T: Writable + ?Sized> Writable for &T {
    fn write(&self, output: &mut dyn ProtocolWriter) -> Result<()> {
        (**self).write(output)
    }
}

impl<T: Writable + ?Sized> Writable for Box<T> {
    fn write(&self, output: &mut dyn ProtocolWriter) -> Result<()> {
        (**self).write(output)
    }
}

impl<T: Writable + ?Sized> Writable for std::sync::Arc<T> {
    fn write(&self, output: &mut dyn ProtocolWriter) -> Result<()> {
        (**self).write(output)
    }
}

/// One recorded writer call.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteCall {
    /// `write_bool`.
    Bool(bool),
    /// `write_byte`.
    Byte(i8),
    /// `write_i16`.
    I16(i16),
    /// `write_i32`.
    I32(i32),
    /// `write_i64`.
    I64(i64),
    /// `write_double`.
    Double(f64),
    /// `write_string`.
    String(String),
    /// `write_binary`.
    Binary(Vec<u8>),
    /// `write_list_begin`.
    ListBegin(WireType, usize),
    /// `write_list_end`.
    ListEnd,
    /// `write_set_begin`.
    SetBegin(WireType, usize),
    /// `write_set_end`.
    SetEnd,
    /// `write_map_begin`.
    MapBegin(WireType, WireType, usize),
    /// `write_map_end`.
    MapEnd,
}

/// Writer that records every call instead of encoding it.
///
/// Handy for asserting the exact call sequence a write body produces.
#[derive(Debug, Default, Clone)]
pub struct RecordingWriter {
    calls: Vec<WriteCall>,
}

impl RecordingWriter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> &[WriteCall] {
        &self.calls
    }

    /// Consumes the recorder, returning its calls.
    #[must_use]
    pub fn into_calls(self) -> Vec<WriteCall> {
        self.calls
    }

    fn record(&mut self, call: WriteCall) -> Result<()> {
        self.calls.push(call);
        Ok(())
    }
}

impl ProtocolWriter for RecordingWriter {
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.record(WriteCall::Bool(value))
    }

    fn write_byte(&mut self, value: i8) -> Result<()> {
        self.record(WriteCall::Byte(value))
    }

    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.record(WriteCall::I16(value))
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.record(WriteCall::I32(value))
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.record(WriteCall::I64(value))
    }

    fn write_double(&mut self, value: f64) -> Result<()> {
        self.record(WriteCall::Double(value))
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        self.record(WriteCall::String(value.to_string()))
    }

    fn write_binary(&mut self, value: &[u8]) -> Result<()> {
        self.record(WriteCall::Binary(value.to_vec()))
    }

    fn write_list_begin(&mut self, element: WireType, size: usize) -> Result<()> {
        self.record(WriteCall::ListBegin(element, size))
    }

    fn write_list_end(&mut self) -> Result<()> {
        self.record(WriteCall::ListEnd)
    }

    fn write_set_begin(&mut self, element: WireType, size: usize) -> Result<()> {
        self.record(WriteCall::SetBegin(element, size))
    }

    fn write_set_end(&mut self) -> Result<()> {
        self.record(WriteCall::SetEnd)
    }

    fn write_map_begin(&mut self, key: WireType, value: WireType, size: usize) -> Result<()> {
        self.record(WriteCall::MapBegin(key, value, size))
    }

    fn write_map_end(&mut self) -> Result<()> {
        self.record(WriteCall::MapEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(i32, String);

    impl Writable for Pair {
        fn write(&self, output: &mut dyn ProtocolWriter) -> Result<()> {
            output.write_i32(self.0)?;
            output.write_string(&self.1)
        }
    }

    #[test]
    fn test_recording_writer_order() {
        let mut writer = RecordingWriter::new();
        writer.write_list_begin(WireType::I32, 2).unwrap();
        writer.write_i32(1).unwrap();
        writer.write_i32(2).unwrap();
        writer.write_list_end().unwrap();

        assert_eq!(
            writer.calls(),
            &[
                WriteCall::ListBegin(WireType::I32, 2),
                WriteCall::I32(1),
                WriteCall::I32(2),
                WriteCall::ListEnd,
            ]
        );
    }

    #[test]
    fn test_writable_through_dyn_writer() {
        let mut writer = RecordingWriter::new();
        let pair = Pair(7, "seven".to_string());
        pair.write(&mut writer).unwrap();

        assert_eq!(
            writer.into_calls(),
            vec![WriteCall::I32(7), WriteCall::String("seven".to_string())]
        );
    }

    #[test]
    fn test_boxed_writable_delegates() {
        let mut writer = RecordingWriter::new();
        let boxed: Box<dyn Writable> = Box::new(Pair(1, "a".to_string()));
        boxed.write(&mut writer).unwrap();
        assert_eq!(writer.calls().len(), 2);
    }

    #[test]
    fn test_reference_writable_delegates() {
        let pair = Pair(3, "c".to_string());
        let by_ref: &Pair = &pair;
        let mut writer = RecordingWriter::new();
        Writable::write(&by_ref, &mut writer).unwrap();

        assert_eq!(
            writer.into_calls(),
            vec![WriteCall::I32(3), WriteCall::String("c".to_string())]
        );
    }
}
