//! Fixed-width integer writes into byte buffers.

use crate::check::{check_value, WINDOW};
use crate::error::CodecResult;

const U64_MIN: i128 = 0;
const U64_MAX: i128 = u64::MAX as i128;
const I64_MIN: i128 = i64::MIN as i128;
const I64_MAX: i128 = i64::MAX as i128;

/// Writes `value` as a little-endian `u64` at `offset`.
///
/// Returns the offset immediately after the written window.
///
/// # Errors
///
/// Returns [`CodecError::ValueOutOfRange`](crate::CodecError::ValueOutOfRange)
/// if `value` is outside `[0, u64::MAX]`, or an offset error if the window
/// does not fit. The buffer is untouched on failure.
pub fn write_u64_le(buf: &mut [u8], value: i128, offset: usize) -> CodecResult<usize> {
    check_value(value, U64_MIN, U64_MAX, buf, offset)?;
    Ok(put_window(buf, offset, (value as u64).to_le_bytes()))
}

/// Writes `value` as a big-endian `u64` at `offset`.
pub fn write_u64_be(buf: &mut [u8], value: i128, offset: usize) -> CodecResult<usize> {
    check_value(value, U64_MIN, U64_MAX, buf, offset)?;
    Ok(put_window(buf, offset, (value as u64).to_be_bytes()))
}

/// Writes `value` as a little-endian `i64` at `offset`.
///
/// Returns the offset immediately after the written window. The permitted
/// domain is `[i64::MIN, i64::MAX]`; the serialized bytes are the value's
/// two's-complement pattern.
pub fn write_i64_le(buf: &mut [u8], value: i128, offset: usize) -> CodecResult<usize> {
    check_value(value, I64_MIN, I64_MAX, buf, offset)?;
    Ok(put_window(buf, offset, (value as u64).to_le_bytes()))
}

/// Writes `value` as a big-endian `i64` at `offset`.
pub fn write_i64_be(buf: &mut [u8], value: i128, offset: usize) -> CodecResult<usize> {
    check_value(value, I64_MIN, I64_MAX, buf, offset)?;
    Ok(put_window(buf, offset, (value as u64).to_be_bytes()))
}

/// Stores the window and returns the next offset.
///
/// The low 64 bits of a validated value are already the two's-complement
/// pattern, so signed and unsigned writes share this path; only the
/// permitted range differs.
fn put_window(buf: &mut [u8], offset: usize, window: [u8; WINDOW]) -> usize {
    buf[offset..offset + WINDOW].copy_from_slice(&window);
    offset + WINDOW
}
