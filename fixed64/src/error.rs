//! Error types for the fixed-width codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while reading or writing 64-bit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer is shorter than one full 8-byte window, so no offset is valid.
    BufferTooSmall {
        /// Length of the buffer in bytes.
        len: usize,
        /// Minimum length required for a single window.
        needed: usize,
    },

    /// The 8-byte window starting at `offset` runs past the end of the buffer.
    OffsetOutOfRange {
        /// The offending offset.
        offset: usize,
        /// Largest offset that still leaves a full window in the buffer.
        max_offset: usize,
    },

    /// Value does not fit the target encoding's domain.
    ///
    /// Raised by writes only; reads cannot produce an out-of-domain value.
    ValueOutOfRange {
        /// The offending value.
        value: i128,
        /// Smallest permitted value.
        min: i128,
        /// Largest permitted value.
        max: i128,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { len, needed } => {
                write!(f, "buffer too small: {len} bytes, need at least {needed}")
            }
            Self::OffsetOutOfRange { offset, max_offset } => {
                write!(
                    f,
                    "offset {offset} out of range: must be >= 0 and <= {max_offset}"
                )
            }
            Self::ValueOutOfRange { value, min, max } => {
                write!(
                    f,
                    "value {value} out of range: must be >= {min} and <= {max}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}
