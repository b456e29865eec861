use alloc::vec::Vec;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::order::ByteOrder;
use crate::reader::BinaryReader;
use crate::size::SizeMode;
use crate::tag::TagPolicy;
use crate::value::Value;
use crate::writer::BinaryWriter;

/// Encodes and decodes fixed-layout values.
///
/// A `Codec` carries the configuration of a call: the ambient byte order, which fields use unless
/// their annotation forces another, and the policy for unknown annotation tokens. It holds no
/// other state, so one `Codec` can be shared freely between threads and calls.
///
/// Each `encode*` / `decode*` call owns its own cursor, which starts at zero and only moves
/// forward. A call that fails stops where it failed; nothing it already wrote is rolled back.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Codec {
    order: ByteOrder,
    tags: TagPolicy,
}

impl Codec {
    /// A codec with the given ambient byte order and the permissive tag policy.
    pub const fn new(order: ByteOrder) -> Self {
        Self {
            order,
            tags: TagPolicy::Permissive,
        }
    }

    /// `Codec::new(ByteOrder::Little)`
    pub const fn little_endian() -> Self {
        Self::new(ByteOrder::Little)
    }

    /// `Codec::new(ByteOrder::Big)`
    pub const fn big_endian() -> Self {
        Self::new(ByteOrder::Big)
    }

    /// Replaces the tag policy.
    pub const fn with_tag_policy(self, tags: TagPolicy) -> Self {
        Self { tags, ..self }
    }

    /// Rejects unknown annotation tokens with [`Error::UnknownTag`].
    pub const fn strict(self) -> Self {
        self.with_tag_policy(TagPolicy::Strict)
    }

    /// The ambient byte order.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// The tag policy.
    pub fn tag_policy(&self) -> TagPolicy {
        self.tags
    }

    /// Number of bytes `value` occupies on the wire.
    pub fn size_of<T: Layout + ?Sized>(&self, value: &T) -> usize {
        value.size_of(SizeMode::Wire)
    }

    /// Encodes `value` into a new buffer of exactly its wire size.
    ///
    /// Fails with [`Error::UnsupportedShape`], before writing anything, if an array in `value`
    /// holds elements of different shapes.
    pub fn encode_value(&self, value: &Value) -> Result<Vec<u8>> {
        let mut w = BinaryWriter::with_capacity(value.size(SizeMode::Wire));
        self.encode_with(value, &mut w)?;
        Ok(w.into_inner())
    }

    /// Appends the encoding of `value` to `out` and returns the number of bytes appended.
    ///
    /// On error, `out` keeps whatever was appended before the failure.
    pub fn encode_value_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<usize> {
        let mut w = BinaryWriter::wrap(core::mem::take(out));
        w.out.reserve(value.size(SizeMode::Wire));
        let start = w.position();
        let result = self.encode_with(value, &mut w);
        *out = w.into_inner();
        result.map(|()| out.len() - start)
    }

    fn encode_with(&self, value: &Value, w: &mut BinaryWriter) -> Result<()> {
        value.check_shape()?;
        tracing::trace!(
            order = %self.order,
            kind = %value.kind(),
            len = value.size(SizeMode::Wire),
            "encoding value"
        );
        encode(value, self.order, self.tags, w)
    }

    /// Decodes `data` into `value` and returns the number of bytes consumed.
    ///
    /// `value` supplies the shape; its current contents are overwritten, except for fields that
    /// are ignored, skipped or private, which keep what they had. If `data` is shorter than the
    /// wire size of `value`, this fails with [`Error::ShortInput`] before touching `value`; an
    /// array whose elements differ in shape fails the same way with [`Error::UnsupportedShape`].
    /// Bytes past the wire size are not looked at.
    pub fn decode_value(&self, data: &[u8], value: &mut Value) -> Result<usize> {
        value.check_shape()?;
        let needed = value.size(SizeMode::Wire);
        if data.len() < needed {
            return Err(Error::ShortInput {
                needed,
                available: data.len(),
            });
        }

        tracing::trace!(order = %self.order, kind = %value.kind(), len = needed, "decoding value");
        let mut r = BinaryReader::new(data);
        decode(&mut r, self.order, self.tags, value)?;
        Ok(r.position())
    }

    /// Encodes a typed value.
    pub fn encode<T: Layout + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        self.encode_value(&value.to_value())
    }

    /// Decodes `data` into a typed value and returns the number of bytes consumed.
    ///
    /// `value` is only updated if decoding succeeds.
    pub fn decode<T: Layout + ?Sized>(&self, data: &[u8], value: &mut T) -> Result<usize> {
        let mut template = value.to_value();
        let len = self.decode_value(data, &mut template)?;
        value.load(&template)?;
        Ok(len)
    }
}
