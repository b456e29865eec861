use core::fmt;

use zerocopy::byteorder::{BigEndian, LittleEndian, U16, U32, U64};

/// The byte order used to encode multi-byte integers.
///
/// Two values compare equal when they name the same order, which is how the traversal engine
/// decides whether a raw byte array should be written in reverse (see [`crate::Codec`]).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the target architecture.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        let order = Self::Big;

        #[cfg(target_endian = "little")]
        let order = Self::Little;

        order
    }

    /// Network byte order, an alias for big-endian.
    pub const fn network() -> Self {
        Self::Big
    }

    /// Returns `true` if this is [`ByteOrder::Big`].
    #[inline(always)]
    pub fn is_big(self) -> bool {
        self == Self::Big
    }

    /// Decodes a `u16` from a 2-byte window.
    #[inline(always)]
    pub fn read_u16(self, window: [u8; 2]) -> u16 {
        match self {
            Self::Little => U16::<LittleEndian>::from_bytes(window).get(),
            Self::Big => U16::<BigEndian>::from_bytes(window).get(),
        }
    }

    /// Decodes a `u32` from a 4-byte window.
    #[inline(always)]
    pub fn read_u32(self, window: [u8; 4]) -> u32 {
        match self {
            Self::Little => U32::<LittleEndian>::from_bytes(window).get(),
            Self::Big => U32::<BigEndian>::from_bytes(window).get(),
        }
    }

    /// Decodes a `u64` from an 8-byte window.
    #[inline(always)]
    pub fn read_u64(self, window: [u8; 8]) -> u64 {
        match self {
            Self::Little => U64::<LittleEndian>::from_bytes(window).get(),
            Self::Big => U64::<BigEndian>::from_bytes(window).get(),
        }
    }

    /// Encodes a `u16` into a 2-byte window.
    #[inline(always)]
    pub fn write_u16(self, value: u16) -> [u8; 2] {
        match self {
            Self::Little => U16::<LittleEndian>::new(value).to_bytes(),
            Self::Big => U16::<BigEndian>::new(value).to_bytes(),
        }
    }

    /// Encodes a `u32` into a 4-byte window.
    #[inline(always)]
    pub fn write_u32(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => U32::<LittleEndian>::new(value).to_bytes(),
            Self::Big => U32::<BigEndian>::new(value).to_bytes(),
        }
    }

    /// Encodes a `u64` into an 8-byte window.
    #[inline(always)]
    pub fn write_u64(self, value: u64) -> [u8; 8] {
        match self {
            Self::Little => U64::<LittleEndian>::new(value).to_bytes(),
            Self::Big => U64::<BigEndian>::new(value).to_bytes(),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("LE"),
            Self::Big => f.write_str("BE"),
        }
    }
}
