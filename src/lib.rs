//! Reads and writes fixed-layout binary records, with byte order chosen per call and overridable
//! per field.
//!
//! A record is described as a [`Value`]: unsigned scalars, fixed-length arrays and composites of
//! named fields. The [`Codec`] walks that structure, computing offsets as it goes, and copies
//! bytes between the value and a flat buffer. Typed structs get the same treatment through the
//! [`Layout`] trait and the [`layout!`] macro, so no per-type marshalling code is needed.
//!
//! ```
//! use endian_io::{layout, ByteOrder, Codec};
//!
//! layout! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Data {
//!         pub f1: u32,
//!         pub f2: u16,
//!         pub f3: u16,
//!         #[endian("BE")]
//!         pub f4: u16,
//!         #[endian("BE")]
//!         pub f5: [u8; 6],
//!     }
//! }
//!
//! let bytes = [
//!     0x57, 0xab, 0xdf, 0x5d, 0xa1, 0xdf, 0xaa, 0x4e,
//!     0x96, 0xb5, 0x3a, 0x5f, 0xe7, 0x66, 0x92, 0x65,
//! ];
//! let mut d = Data::default();
//! Codec::new(ByteOrder::Little).decode(&bytes, &mut d).unwrap();
//! assert_eq!(d.f1, 0x5ddf_ab57);
//! assert_eq!(d.f4, 0x96b5);
//! assert_eq!(d.f5, [0x65, 0x92, 0x66, 0xe7, 0x5f, 0x3a]);
//! ```
//!
//! # Byte arrays
//!
//! Arrays of `u8` have no numeric interpretation of their own. Under big-endian they are copied
//! whole-array reversed (wire byte `len - 1 - i` is element `i`); under little-endian they are
//! copied as-is. Arrays of wider elements are never reversed; each element is converted on its
//! own.
//!
//! # Field annotations
//!
//! See [`tag`] for the annotation tokens (`-`, `skip`, `BE`, `LE`) and their precedence.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod layout;

mod codec;
mod decode;
mod encode;
mod error;
mod order;
mod reader;
mod size;
pub mod tag;
mod value;
mod writer;

#[cfg(feature = "std")]
mod io;


pub use codec::Codec;
pub use error::{Error, Result};
pub use layout::Layout;
pub use order::ByteOrder;
pub use reader::BinaryReader;
pub use size::SizeMode;
pub use tag::{FieldDirective, TagPolicy};
pub use value::{Access, Array, Composite, Field, Kind, Value};
pub use writer::BinaryWriter;

#[cfg(feature = "std")]
pub use io::{read, write};

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}
