extern crate alloc;
use alloc::vec::Vec;

use crate::order::ByteOrder;

/// Encodes fixed-width unsigned integers into a `Vec<u8>`.
///
/// This is the write side of the plain fixed-width codec. Every `write_*` call appends exactly
/// the width of its type, so the length of `out` is the write position.
#[derive(Default)]
pub struct BinaryWriter {
    /// The output data.
    pub out: Vec<u8>,
}

impl BinaryWriter {
    /// Creates a new `BinaryWriter` over an empty `Vec<u8>`.
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Creates a new `BinaryWriter` with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
        }
    }

    /// Creates a `BinaryWriter` that appends to an existing buffer.
    pub fn wrap(out: Vec<u8>) -> Self {
        Self { out }
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// Number of bytes written so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.out.len()
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) {
        self.write_bytes(&value)
    }

    /// Writes `len` zero bytes. Used for spans that are on the wire but not copied.
    pub fn write_zeros(&mut self, len: usize) {
        self.out.resize(self.out.len() + len, 0);
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) {
        self.out.push(value)
    }

    /// Writes a single `u16` value
    pub fn write_u16(&mut self, order: ByteOrder, value: u16) {
        self.write_cbytes(order.write_u16(value))
    }

    /// Writes a single `u32` value
    pub fn write_u32(&mut self, order: ByteOrder, value: u32) {
        self.write_cbytes(order.write_u32(value))
    }

    /// Writes a single `u64` value
    pub fn write_u64(&mut self, order: ByteOrder, value: u64) {
        self.write_cbytes(order.write_u64(value))
    }
}
