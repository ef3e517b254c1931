//! Byte-level reader with bounded operations.

use crate::error::{StreamError, StreamResult};

/// A byte-level reader for decoding binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input. Multi-byte values are read
/// little-endian. A failed read consumes nothing.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a raw byte run of exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> StreamResult<&'a [u8]> {
        self.ensure(count)?;
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> StreamResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> StreamResult<u8> {
        self.ensure(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads a signed byte.
    pub fn read_i8(&mut self) -> StreamResult<i8> {
        Ok(i8::from_le_bytes([self.read_u8()?]))
    }

    /// Reads a `u16` (little-endian).
    pub fn read_u16(&mut self) -> StreamResult<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads an `i16` (little-endian).
    pub fn read_i16(&mut self) -> StreamResult<i16> {
        Ok(i16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads a `u32` (little-endian).
    pub fn read_u32(&mut self) -> StreamResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads an `i32` (little-endian).
    pub fn read_i32(&mut self) -> StreamResult<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a `u64` (little-endian).
    pub fn read_u64(&mut self) -> StreamResult<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads an `i64` (little-endian).
    pub fn read_i64(&mut self) -> StreamResult<i64> {
        Ok(i64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads an `f32` (little-endian bit pattern).
    pub fn read_f32(&mut self) -> StreamResult<f32> {
        Ok(f32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads an `f64` (little-endian bit pattern).
    pub fn read_f64(&mut self) -> StreamResult<f64> {
        Ok(f64::from_le_bytes(self.read_array::<8>()?))
    }

    fn ensure(&self, count: usize) -> StreamResult<()> {
        let available = self.remaining();
        if count > available {
            return Err(StreamError::UnexpectedEof {
                requested: count,
                available,
            });
        }
        Ok(())
    }
}
