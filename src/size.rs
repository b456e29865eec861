//! Encoded size of a [`Value`], computed from its shape and annotations only.

use crate::tag::FieldDirective;
use crate::value::{Access, Field, Value};

/// Which fields count toward a size.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SizeMode {
    /// Every field except those annotated `-` (ignore).
    Logical,
    /// Every field, including ignored and skipped ones.
    Physical,
    /// Exactly the bytes one encode produces or one decode consumes. Ignored fields count zero.
    /// Skipped and private fields are passed over as opaque spans of their physical size.
    Wire,
}

impl Value {
    /// Returns the number of bytes this value occupies under `mode`.
    ///
    /// Arrays are sized from their first element.
    pub fn size(&self, mode: SizeMode) -> usize {
        match self {
            Self::U8(_) => 1,
            Self::U16(_) => 2,
            Self::U32(_) => 4,
            Self::U64(_) => 8,
            Self::Array(a) => match a.first() {
                Some(elem) => elem.size(mode) * a.len(),
                None => 0,
            },
            Self::Composite(c) => c.fields.iter().map(|f| f.size(mode)).sum(),
        }
    }
}

impl Field {
    /// Returns the number of bytes this field contributes to its composite under `mode`.
    pub fn size(&self, mode: SizeMode) -> usize {
        if mode == SizeMode::Physical {
            return self.value.size(mode);
        }

        match FieldDirective::resolve(self.tag.as_deref()) {
            FieldDirective::Ignore => 0,
            FieldDirective::Skip if mode == SizeMode::Wire => self.value.size(SizeMode::Physical),
            _ if mode == SizeMode::Wire && self.access == Access::Private => {
                self.value.size(SizeMode::Physical)
            }
            _ => self.value.size(mode),
        }
    }
}
