//! Typed values.
//!
//! [`Layout`] connects ordinary Rust data to the [`Value`] model. It is implemented for the four
//! unsigned integer types and for arrays of any `Layout` type; the [`layout!`](crate::layout!)
//! macro implements it for structs, including per-field annotations.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::size::SizeMode;
use crate::value::{Array, Kind, Value};

/// A type with a fixed binary layout.
pub trait Layout {
    /// Describes `self` as a [`Value`]: its shape, annotations and current contents.
    fn to_value(&self) -> Value;

    /// Copies the contents of `value` into `self`.
    ///
    /// `value` must have the shape `to_value` produces; anything else is
    /// [`Error::UnsupportedShape`].
    fn load(&mut self, value: &Value) -> Result<()>;

    /// Encoded size of `self` under `mode`.
    fn size_of(&self, mode: SizeMode) -> usize {
        self.to_value().size(mode)
    }
}

macro_rules! layout_scalar {
    ($($t:ty => $variant:ident),*) => {$(
        impl Layout for $t {
            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn load(&mut self, value: &Value) -> Result<()> {
                match *value {
                    Value::$variant(n) => {
                        *self = n;
                        Ok(())
                    }
                    ref other => Err(Error::shape(Kind::$variant, other.kind())),
                }
            }

            fn size_of(&self, _mode: SizeMode) -> usize {
                core::mem::size_of::<$t>()
            }
        }
    )*}
}

layout_scalar!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);

impl<T: Layout, const N: usize> Layout for [T; N] {
    fn to_value(&self) -> Value {
        // Elements share the type `T`, so they share a shape.
        let elems: Vec<Value> = self.iter().map(Layout::to_value).collect();
        Value::Array(Array::from_vec(elems))
    }

    fn load(&mut self, value: &Value) -> Result<()> {
        let Value::Array(a) = value else {
            return Err(Error::shape(Kind::Array, value.kind()));
        };
        if a.len() != N {
            return Err(Error::shape(Kind::Array, Kind::Array));
        }
        for (dst, src) in self.iter_mut().zip(a) {
            dst.load(src)?;
        }
        Ok(())
    }
}

/// Declares a struct with a fixed binary layout and implements [`Layout`] for it.
///
/// Every field type must implement [`Layout`]. A field can carry an annotation with
/// `#[endian("...")]`, using the tokens described in [`crate::tag`], and can be marked
/// `#[access(Private)]` to have the codec pass over its bytes without copying them (see
/// [`crate::Access`]). Rust visibility plays no part: the generated impl lives next to the struct
/// and reaches every field, so a field without `pub` is still copied.
///
/// Fields accept doc comments, then `#[endian]`, then `#[access]`, in that order. Other field
/// attributes are not supported.
///
/// ```
/// endian_io::layout! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Header {
///         pub magic: [u8; 4],
///         #[endian("BE")]
///         pub length: u32,
///         #[endian("skip")]
///         pub reserved: u16,
///         #[access(Private)]
///         checksum: u8,
///     }
/// }
///
/// let h = Header { magic: *b"HDR0", length: 0x10, reserved: 0xffff, checksum: 0x5a };
/// let bytes = endian_io::Codec::little_endian().encode(&h).unwrap();
/// assert_eq!(bytes, [b'H', b'D', b'R', b'0', 0, 0, 0, 0x10, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! layout {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[endian($tag:literal)])?
                $(#[access($access:ident)])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Layout for $name {
            fn to_value(&self) -> $crate::Value {
                $crate::Value::Composite($crate::Composite::new($crate::__private::vec![
                    $(
                        $crate::Field::new(
                            ::core::stringify!($field),
                            $crate::Layout::to_value(&self.$field),
                        )
                        $(.with_tag($tag))?
                        $(.with_access($crate::Access::$access))?
                    ),*
                ]))
            }

            fn load(&mut self, value: &$crate::Value) -> $crate::Result<()> {
                let ::core::option::Option::Some(composite) = value.as_composite() else {
                    return ::core::result::Result::Err($crate::Error::UnsupportedShape {
                        expected: $crate::Kind::Composite,
                        found: value.kind(),
                    });
                };
                #[allow(unused_mut, unused_variables)]
                let mut fields = composite.fields.iter();
                $(
                    let ::core::option::Option::Some(field) = fields.next() else {
                        return ::core::result::Result::Err($crate::Error::UnsupportedShape {
                            expected: $crate::Kind::Composite,
                            found: $crate::Kind::Composite,
                        });
                    };
                    $crate::Layout::load(&mut self.$field, &field.value)?;
                )*
                ::core::result::Result::Ok(())
            }
        }
    };
}
