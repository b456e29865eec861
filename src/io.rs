//! Stream entry points.
//!
//! Reading computes the wire size of the target, reads exactly that many bytes into a buffer and
//! decodes the buffer. Writing encodes into a buffer and hands it to the sink in one
//! `write_all`.

use std::io::{ErrorKind, Read, Write};

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::order::ByteOrder;
use crate::size::SizeMode;
use crate::value::Value;

impl Codec {
    /// Reads one value of `value`'s shape from `reader`.
    ///
    /// Fails with [`Error::EndOfInput`] if the reader yields no bytes at all, and with
    /// [`Error::ShortInput`] if it yields some but fewer than the wire size.
    pub fn read_value<R: Read>(&self, mut reader: R, value: &mut Value) -> Result<()> {
        value.check_shape()?;
        let len = value.size(SizeMode::Wire);
        let mut buf = vec![0u8; len];
        let n = read_full(&mut reader, &mut buf)?;
        if n < len {
            tracing::debug!(needed = len, available = n, "stream ended early");
            return Err(if n == 0 {
                Error::EndOfInput
            } else {
                Error::ShortInput {
                    needed: len,
                    available: n,
                }
            });
        }
        self.decode_value(&buf, value)?;
        Ok(())
    }

    /// Writes `value` to `writer` in one `write_all` call.
    pub fn write_value<W: Write>(&self, mut writer: W, value: &Value) -> Result<()> {
        let buf = self.encode_value(value)?;
        writer.write_all(&buf)?;
        Ok(())
    }

    /// Reads a typed value from `reader`. `value` is only updated if reading succeeds.
    pub fn read<R: Read, T: Layout + ?Sized>(&self, reader: R, value: &mut T) -> Result<()> {
        let mut template = value.to_value();
        self.read_value(reader, &mut template)?;
        value.load(&template)
    }

    /// Writes a typed value to `writer`.
    pub fn write<W: Write, T: Layout + ?Sized>(&self, writer: W, value: &T) -> Result<()> {
        self.write_value(writer, &value.to_value())
    }
}

/// Reads one fixed-layout value from `reader`, using `order` for every field that does not
/// force its own.
pub fn read<R: Read, T: Layout + ?Sized>(reader: R, order: ByteOrder, value: &mut T) -> Result<()> {
    Codec::new(order).read(reader, value)
}

/// Writes one fixed-layout value to `writer`, using `order` for every field that does not
/// force its own.
pub fn write<W: Write, T: Layout + ?Sized>(writer: W, order: ByteOrder, value: &T) -> Result<()> {
    Codec::new(order).write(writer, value)
}

/// Like `read_exact`, but reports how much was read instead of failing on a short stream.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
