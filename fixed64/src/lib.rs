//! Fixed-width 64-bit integer reads and writes for byte buffers.
//!
//! This crate provides the eight operations for storing `u64`/`i64` values
//! little- or big-endian at arbitrary byte offsets in a caller-owned buffer.
//! Writes take the value as `i128` so inputs outside the 64-bit domain are
//! rejected with a structured error instead of being truncated at the call
//! boundary, and return the offset just past the written window so calls
//! chain naturally.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every access is validated before a byte moves;
//!   a failed write leaves the buffer untouched.
//! - **Exact domains** - Range checks run in `i128`, wide enough to hold
//!   every representable input without precision loss.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use fixed64::{read_i64_be, read_u64_le, write_i64_be, write_u64_le};
//!
//! let mut buf = [0u8; 16];
//! let next = write_u64_le(&mut buf, 301, 0).unwrap();
//! let end = write_i64_be(&mut buf, -2, next).unwrap();
//! assert_eq!(end, 16);
//!
//! assert_eq!(read_u64_le(&buf, 0).unwrap(), 301);
//! assert_eq!(read_i64_be(&buf, 8).unwrap(), -2);
//! ```

mod check;
mod error;
mod read;
mod write;

pub use error::{CodecError, CodecResult};
pub use read::{read_i64_be, read_i64_le, read_u64_be, read_u64_le};
pub use write::{write_i64_be, write_i64_le, write_u64_be, write_u64_le};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let buf = [0u8; 8];
        let _ = read_u64_le(&buf, 0);
        let _ = read_u64_be(&buf, 0);
        let _ = read_i64_le(&buf, 0);
        let _ = read_i64_be(&buf, 0);
        let _: CodecResult<()> = Ok(());
    }

    #[test]
    fn doctest_example() {
        let mut buf = [0u8; 16];
        let next = write_u64_le(&mut buf, 301, 0).unwrap();
        let end = write_i64_be(&mut buf, -2, next).unwrap();
        assert_eq!(end, 16);

        assert_eq!(read_u64_le(&buf, 0).unwrap(), 301);
        assert_eq!(read_i64_be(&buf, 8).unwrap(), -2);
    }

    #[test]
    fn mixed_roundtrip_at_chained_offsets() {
        let mut buf = [0u8; 32];
        let mut offset = 0;
        offset = write_u64_le(&mut buf, i128::from(u64::MAX), offset).unwrap();
        offset = write_i64_le(&mut buf, i128::from(i64::MIN), offset).unwrap();
        offset = write_u64_be(&mut buf, 0, offset).unwrap();
        offset = write_i64_be(&mut buf, -42, offset).unwrap();
        assert_eq!(offset, 32);

        assert_eq!(read_u64_le(&buf, 0).unwrap(), u64::MAX);
        assert_eq!(read_i64_le(&buf, 8).unwrap(), i64::MIN);
        assert_eq!(read_u64_be(&buf, 16).unwrap(), 0);
        assert_eq!(read_i64_be(&buf, 24).unwrap(), -42);
    }

    #[test]
    fn same_bits_under_both_signednesses() {
        // The unsigned reading of a negative value's pattern differs by
        // exactly 2^64.
        let mut buf = [0u8; 8];
        write_i64_le(&mut buf, -1, 0).unwrap();
        assert_eq!(read_u64_le(&buf, 0).unwrap(), u64::MAX);
        assert_eq!(read_i64_le(&buf, 0).unwrap(), -1);
    }

    #[test]
    fn endianness_mirror() {
        let mut le = [0u8; 8];
        let mut be = [0u8; 8];
        write_i64_le(&mut le, -123_456_789, 0).unwrap();
        write_i64_be(&mut be, -123_456_789, 0).unwrap();
        let mut reversed = be;
        reversed.reverse();
        assert_eq!(le, reversed);
    }
}
