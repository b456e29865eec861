//! Buffer to value.

use crate::error::{Error, Result};
use crate::order::ByteOrder;
use crate::reader::BinaryReader;
use crate::size::SizeMode;
use crate::tag::{FieldDirective, TagPolicy};
use crate::value::{Access, Array, Composite, Kind, Value};

/// Fills `value` from `r`, starting at the reader's current position.
///
/// The reader is the cursor: it is shared by the whole descent and only moves forward. On error
/// the descent stops; fields decoded before the error keep their new contents. `value` must
/// already have passed [`Value::check_shape`].
pub(crate) fn decode(
    r: &mut BinaryReader<'_>,
    order: ByteOrder,
    policy: TagPolicy,
    value: &mut Value,
) -> Result<()> {
    match value {
        Value::U8(n) => *n = r.read_u8()?,
        Value::U16(n) => *n = r.read_u16(order)?,
        Value::U32(n) => *n = r.read_u32(order)?,
        Value::U64(n) => *n = r.read_u64(order)?,
        Value::Array(a) if a.is_bytes() => decode_bytes(r, order, a)?,
        Value::Array(a) => {
            for elem in a.iter_mut() {
                decode(r, order, policy, elem)?;
            }
        }
        Value::Composite(c) => decode_composite(r, order, policy, c)?,
    }
    Ok(())
}

/// Raw byte arrays have no numeric interpretation, so "big-endian" means the whole array is
/// reversed relative to the wire: destination `i` takes source byte `len - 1 - i`.
fn decode_bytes(r: &mut BinaryReader<'_>, order: ByteOrder, a: &mut Array) -> Result<()> {
    let len = a.len();
    let src = r.read_bytes(len)?;
    for (i, elem) in a.iter_mut().enumerate() {
        let Value::U8(b) = elem else {
            return Err(Error::shape(Kind::U8, elem.kind()));
        };
        *b = if order.is_big() { src[len - 1 - i] } else { src[i] };
    }
    Ok(())
}

fn decode_composite(
    r: &mut BinaryReader<'_>,
    order: ByteOrder,
    policy: TagPolicy,
    c: &mut Composite,
) -> Result<()> {
    for field in c.fields.iter_mut() {
        let directive = FieldDirective::parse(field.tag.as_deref(), policy)?;
        match directive {
            FieldDirective::Ignore => continue,
            FieldDirective::Skip => r.skip(field.value.size(SizeMode::Physical))?,
            _ if field.access == Access::Private => {
                let len = field.value.size(SizeMode::Physical);
                tracing::debug!(field = %field.name, len, "passing over private field");
                r.skip(len)?;
            }
            _ => decode(r, directive.order_or(order), policy, &mut field.value)?,
        }
    }
    Ok(())
}
