use crate::error::{Error, Result};
use crate::order::ByteOrder;

/// Reads fixed-width unsigned integers from a slice of bytes.
///
/// This is the plain fixed-width codec: each `read_*` call takes the byte order to use, reads
/// exactly the width of its type at the current position, and advances the position. The
/// position only ever moves forward.
///
/// This type only supports reading values from a slice of bytes. If you need to read values from
/// a file or `Read` implementation, copy the data into an in-memory buffer first (this is what
/// [`crate::read`] does).
///
/// If a read fails with [`Error::ShortInput`], the position is left where it was before that
/// read; reads that already succeeded are not undone.
pub struct BinaryReader<'a> {
    /// The input data being parsed.
    pub data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    /// Constructor
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes that have not been consumed yet.
    #[inline(always)]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Fails with [`Error::ShortInput`] unless at least `len` bytes remain.
    #[inline(always)]
    pub fn require(&self, len: usize) -> Result<()> {
        let available = self.data.len() - self.pos;
        if available < len {
            Err(Error::ShortInput {
                needed: len,
                available,
            })
        } else {
            Ok(())
        }
    }

    /// Advances the position by `len` bytes without looking at them.
    #[inline(always)]
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.require(len)?;
        self.pos += len;
        Ok(())
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.require(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut window = [0u8; N];
        window.copy_from_slice(self.read_bytes(N)?);
        Ok(window)
    }

    /// Reads a `u16` in the given byte order.
    #[inline(always)]
    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16> {
        Ok(order.read_u16(self.read_cbytes()?))
    }

    /// Reads a `u32` in the given byte order.
    #[inline(always)]
    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32> {
        Ok(order.read_u32(self.read_cbytes()?))
    }

    /// Reads a `u64` in the given byte order.
    #[inline(always)]
    pub fn read_u64(&mut self, order: ByteOrder) -> Result<u64> {
        Ok(order.read_u64(self.read_cbytes()?))
    }
}
