use std::error;
use std::fmt;

/// Errors produced by the fallible `CircularArray` operations.
///
/// Only two operations can fail: popping without a default from an empty
/// array, and single-element get/set with an index that is out of bounds
/// after negative-index resolution. Everything else (pushes, slicing,
/// compaction, iteration, formatting) is infallible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A pop was attempted on an empty array and no default was supplied.
    EmptyContainer,
    /// A get/set index fell outside `[0, len)` after resolving negative
    /// indices. Slicing never produces this; it clamps instead.
    IndexOutOfBounds {
        /// The index as passed by the caller, before negative resolution.
        index: isize,
        /// The array length at the time of the access.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContainer => {
                write!(f, "cannot pop from an empty circular array")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "index {index} out of bounds for circular array of length {len}"
                )
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::EmptyContainer.to_string(),
            "cannot pop from an empty circular array"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: -4, len: 3 }.to_string(),
            "index -4 out of bounds for circular array of length 3"
        );
    }
}
