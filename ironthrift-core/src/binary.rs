//! Thrift binary protocol writer.
//!
//! All multi-byte values are big-endian. Strings, binaries and container
//! sizes carry a signed 32-bit length prefix.
//!
//! # Wire Format
//! ```text
//! bool        1 byte (0 or 1)
//! byte/i8     1 byte
//! i16/i32/i64 2/4/8 bytes
//! double      8 bytes (IEEE-754 bits)
//! string      i32 length + UTF-8 bytes
//! binary      i32 length + raw bytes
//! list/set    element type (1 byte) + i32 size
//! map         key type (1 byte) + value type (1 byte) + i32 size
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Error, Result};
use crate::protocol::ProtocolWriter;
use crate::wire::WireType;

/// [`ProtocolWriter`] encoding into a growable byte buffer.
#[derive(Debug, Default, Clone)]
pub struct BinaryProtocolWriter {
    buffer: BytesMut,
}

impl BinaryProtocolWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Freezes the writer into immutable bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    /// Discards everything written, keeping the allocation.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    // Checked before anything is written so a failed call leaves the buffer untouched.
    #[inline]
    fn checked_size(kind: &'static str, size: usize) -> Result<i32> {
        i32::try_from(size).map_err(|_| Error::SizeOverflow { kind, size })
    }

    #[inline]
    fn put_prefixed(&mut self, kind: &'static str, bytes: &[u8]) -> Result<()> {
        let len = Self::checked_size(kind, bytes.len())?;
        self.buffer.put_i32(len);
        self.buffer.put_slice(bytes);
        Ok(())
    }
}

impl ProtocolWriter for BinaryProtocolWriter {
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.buffer.put_u8(u8::from(value));
        Ok(())
    }

    fn write_byte(&mut self, value: i8) -> Result<()> {
        self.buffer.put_i8(value);
        Ok(())
    }

    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.buffer.put_i16(value);
        Ok(())
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.buffer.put_i32(value);
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.buffer.put_i64(value);
        Ok(())
    }

    fn write_double(&mut self, value: f64) -> Result<()> {
        self.buffer.put_f64(value);
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        self.put_prefixed("string", value.as_bytes())
    }

    fn write_binary(&mut self, value: &[u8]) -> Result<()> {
        self.put_prefixed("binary", value)
    }

    fn write_list_begin(&mut self, element: WireType, size: usize) -> Result<()> {
        let size = Self::checked_size("list", size)?;
        self.buffer.put_u8(element.code());
        self.buffer.put_i32(size);
        Ok(())
    }

    fn write_list_end(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_set_begin(&mut self, element: WireType, size: usize) -> Result<()> {
        let size = Self::checked_size("set", size)?;
        self.buffer.put_u8(element.code());
        self.buffer.put_i32(size);
        Ok(())
    }

    fn write_set_end(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_map_begin(&mut self, key: WireType, value: WireType, size: usize) -> Result<()> {
        let size = Self::checked_size("map", size)?;
        self.buffer.put_u8(key.code());
        self.buffer.put_u8(value.code());
        self.buffer.put_i32(size);
        Ok(())
    }

    fn write_map_end(&mut self) -> Result<()> {
        Ok(())
    }
}
