//! The dynamic value model walked by the traversal engine.
//!
//! A [`Value`] is a closed set of shapes: fixed-width unsigned scalars, fixed-length arrays of
//! values with the same shape, and composites (ordered, named, optionally annotated fields). A
//! value's encoded size is known from its shape alone; nothing in this model has a length prefix.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};

/// The shape discriminant of a [`Value`], used in error reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    /// 8-bit unsigned scalar
    U8,
    /// 16-bit unsigned scalar
    U16,
    /// 32-bit unsigned scalar
    U32,
    /// 64-bit unsigned scalar
    U64,
    /// Fixed-length array
    Array,
    /// Record of named fields
    Composite,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Array => "array",
            Self::Composite => "composite",
        })
    }
}

/// A typed location the codec can fill (decode) or serialize (encode).
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Value {
    /// 8-bit unsigned scalar
    U8(u8),
    /// 16-bit unsigned scalar
    U16(u16),
    /// 32-bit unsigned scalar
    U32(u32),
    /// 64-bit unsigned scalar
    U64(u64),
    /// Fixed-length array of values with the same shape
    Array(Array),
    /// Record of named fields, in declaration order
    Composite(Composite),
}

impl Value {
    /// Returns the shape discriminant of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::Array(_) => Kind::Array,
            Self::Composite(_) => Kind::Composite,
        }
    }

    /// Builds a byte array holding a copy of `bytes`.
    pub fn bytes(bytes: &[u8]) -> Self {
        Self::Array(Array::from_bytes(bytes))
    }

    /// Returns the array, if this value is one.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the composite, if this value is one.
    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Self::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the composite mutably, if this value is one.
    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Self::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Returns `true` if `self` and `other` have the same layout: same scalar widths, same array
    /// lengths and element shapes, same field annotations and visibility. Field names and scalar
    /// contents are not compared.
    pub fn same_shape(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len()
                    && match (a.first(), b.first()) {
                        (Some(x), Some(y)) => x.same_shape(y),
                        _ => true,
                    }
            }
            (Self::Composite(a), Self::Composite(b)) => {
                a.fields.len() == b.fields.len()
                    && a.fields.iter().zip(&b.fields).all(|(x, y)| {
                        x.tag == y.tag && x.access == y.access && x.value.same_shape(&y.value)
                    })
            }
            _ => self.kind() == other.kind(),
        }
    }

    /// Checks that every array in `self`, at any depth, holds elements of one shape.
    ///
    /// Sizes are computed from an array's first element, so a value that fails this check would
    /// encode and decode to different lengths than [`Value::size`] reports. The codec runs it
    /// before touching any buffer or field.
    pub fn check_shape(&self) -> Result<()> {
        match self {
            Self::U8(_) | Self::U16(_) | Self::U32(_) | Self::U64(_) => Ok(()),
            Self::Array(a) => {
                let Some(first) = a.first() else {
                    return Ok(());
                };
                for elem in a {
                    if !elem.same_shape(first) {
                        return Err(Error::shape(first.kind(), elem.kind()));
                    }
                    elem.check_shape()?;
                }
                Ok(())
            }
            Self::Composite(c) => c.fields.iter().try_for_each(|f| f.value.check_shape()),
        }
    }
}

macro_rules! value_from_scalar {
    ($($t:ty => $variant:ident),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Self::$variant(n)
            }
        }
    )*}
}

value_from_scalar!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Composite> for Value {
    fn from(c: Composite) -> Self {
        Self::Composite(c)
    }
}

/// A fixed-length sequence of values that all share one shape.
///
/// The element size of an array is taken from its first element, so arrays are checked for
/// homogeneity when they are built.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Array {
    elems: Vec<Value>,
}

impl Array {
    /// Builds an array, rejecting elements whose shape differs from element 0.
    pub fn new(elems: Vec<Value>) -> Result<Self> {
        if let Some((first, rest)) = elems.split_first() {
            if let Some(i) = rest.iter().position(|e| !e.same_shape(first)) {
                return Err(Error::MixedArray {
                    index: i + 1,
                    expected: first.kind(),
                    found: rest[i].kind(),
                });
            }
        }
        Ok(Self { elems })
    }

    /// Builds an array without the homogeneity check. Callers guarantee the elements share a
    /// shape.
    pub(crate) fn from_vec(elems: Vec<Value>) -> Self {
        Self { elems }
    }

    /// Builds an array of `len` copies of `elem`.
    pub fn repeat(elem: Value, len: usize) -> Self {
        Self {
            elems: alloc::vec![elem; len],
        }
    }

    /// Builds a byte array.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            elems: bytes.iter().copied().map(Value::U8).collect(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The first element, which determines the element shape.
    pub fn first(&self) -> Option<&Value> {
        self.elems.first()
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elems.get(index)
    }

    /// The elements, in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.elems.iter()
    }

    /// The elements, mutably.
    ///
    /// Replacing an element with one of a different shape is allowed here, but the codec then
    /// rejects the whole value with [`Error::UnsupportedShape`]. See [`Value::check_shape`].
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Value> {
        self.elems.iter_mut()
    }

    /// Returns `true` if the element shape is `u8`. Byte arrays follow a different copy rule than
    /// arrays of wider elements.
    pub fn is_bytes(&self) -> bool {
        matches!(self.elems.first(), Some(Value::U8(_)))
    }

    /// Copies the contents of a byte array out. Returns `None` unless every element is `u8`.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        self.elems
            .iter()
            .map(|e| match e {
                Value::U8(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

/// A record of named fields, laid out in declaration order with no padding.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Composite {
    /// The fields, in declaration (and wire) order.
    pub fields: Vec<Field>,
}

impl Composite {
    /// Builds a composite from its fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Appends a field. Builder-style.
    pub fn with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Looks up a field value by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .map(|f| &mut f.value)
    }
}

/// Whether the codec may copy a field's contents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Access {
    /// The field is copied normally.
    #[default]
    Public,
    /// The field is not externally visible. Its bytes are still accounted for on the wire, but
    /// the codec neither reads nor writes its contents.
    Private,
}

/// One field of a [`Composite`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Field {
    /// Field name. Only used for lookup and diagnostics.
    pub name: Cow<'static, str>,
    /// Field contents.
    pub value: Value,
    /// Annotation, a comma-separated list of tokens. See [`crate::FieldDirective`].
    pub tag: Option<Cow<'static, str>>,
    /// Whether the codec may copy the contents.
    pub access: Access,
}

impl Field {
    /// A public field with no annotation.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            tag: None,
            access: Access::Public,
        }
    }

    /// A field the codec is not allowed to copy.
    pub fn private(name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            access: Access::Private,
            ..Self::new(name, value)
        }
    }

    /// Sets the access of the field.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Attaches an annotation, e.g. `"BE"`, `"skip"` or `"-"`.
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
