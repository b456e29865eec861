use alloc::string::String;

use thiserror::Error;

use crate::value::Kind;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the codec.
///
/// Every variant aborts the current call. Bytes already written to the output, or fields already
/// filled in the target value, are not rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// The input holds fewer bytes than the value being decoded requires.
    #[error("short input: needed {needed} bytes, {available} available")]
    ShortInput {
        /// Bytes required from the current position.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// The source stream was already exhausted; not a single byte could be read.
    #[error("end of input")]
    EndOfInput,

    /// A value has a shape other than the one the operation requires.
    #[error("unsupported shape: expected {expected}, found {found}")]
    UnsupportedShape {
        /// The shape the operation required.
        expected: Kind,
        /// The shape that was found.
        found: Kind,
    },

    /// An array was built from elements whose shapes differ.
    #[error("mixed array: element {index} is {found}, element 0 is {expected}")]
    MixedArray {
        /// Index of the first offending element.
        index: usize,
        /// Shape of element 0.
        expected: Kind,
        /// Shape of the offending element.
        found: Kind,
    },

    /// A field annotation contains a token that is not recognized. Only reported under
    /// [`crate::TagPolicy::Strict`].
    #[error("unknown field annotation token {0:?}")]
    UnknownTag(String),

    /// The underlying reader or writer failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn shape(expected: Kind, found: Kind) -> Self {
        Self::UnsupportedShape { expected, found }
    }
}
