//! Value to buffer.

use crate::error::{Error, Result};
use crate::order::ByteOrder;
use crate::size::SizeMode;
use crate::tag::{FieldDirective, TagPolicy};
use crate::value::{Access, Array, Composite, Kind, Value};
use crate::writer::BinaryWriter;

/// Appends the encoding of `value` to `w`.
///
/// Mirror of [`crate::decode::decode`]: every span decode would consume, encode produces, with
/// skipped and private fields written as zeros. `value` must already have passed
/// [`Value::check_shape`].
pub(crate) fn encode(
    value: &Value,
    order: ByteOrder,
    policy: TagPolicy,
    w: &mut BinaryWriter,
) -> Result<()> {
    match value {
        Value::U8(n) => w.write_u8(*n),
        Value::U16(n) => w.write_u16(order, *n),
        Value::U32(n) => w.write_u32(order, *n),
        Value::U64(n) => w.write_u64(order, *n),
        Value::Array(a) if a.is_bytes() => encode_bytes(a, order, w)?,
        Value::Array(a) => {
            for elem in a {
                encode(elem, order, policy, w)?;
            }
        }
        Value::Composite(c) => encode_composite(c, order, policy, w)?,
    }
    Ok(())
}

/// Under big-endian, source byte `i` lands at destination `len - 1 - i`.
fn encode_bytes(a: &Array, order: ByteOrder, w: &mut BinaryWriter) -> Result<()> {
    let start = w.position();
    for elem in a {
        let Value::U8(b) = elem else {
            return Err(Error::shape(Kind::U8, elem.kind()));
        };
        w.write_u8(*b);
    }
    if order.is_big() {
        w.out[start..].reverse();
    }
    Ok(())
}

fn encode_composite(
    c: &Composite,
    order: ByteOrder,
    policy: TagPolicy,
    w: &mut BinaryWriter,
) -> Result<()> {
    for field in &c.fields {
        let directive = FieldDirective::parse(field.tag.as_deref(), policy)?;
        match directive {
            FieldDirective::Ignore => continue,
            FieldDirective::Skip => w.write_zeros(field.value.size(SizeMode::Physical)),
            _ if field.access == Access::Private => {
                let len = field.value.size(SizeMode::Physical);
                tracing::debug!(field = %field.name, len, "passing over private field");
                w.write_zeros(len);
            }
            _ => encode(&field.value, directive.order_or(order), policy, w)?,
        }
    }
    Ok(())
}
