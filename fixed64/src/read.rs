//! Fixed-width integer reads from byte buffers.

use crate::check::{check_window, WINDOW};
use crate::error::CodecResult;

/// Reads a `u64` stored little-endian at `offset`.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`](crate::CodecError::BufferTooSmall)
/// or [`CodecError::OffsetOutOfRange`](crate::CodecError::OffsetOutOfRange)
/// if `[offset, offset + 7]` does not lie inside `buf`.
pub fn read_u64_le(buf: &[u8], offset: usize) -> CodecResult<u64> {
    Ok(u64::from_le_bytes(window_at(buf, offset)?))
}

/// Reads a `u64` stored big-endian at `offset`.
pub fn read_u64_be(buf: &[u8], offset: usize) -> CodecResult<u64> {
    Ok(u64::from_be_bytes(window_at(buf, offset)?))
}

/// Reads an `i64` stored little-endian at `offset`.
///
/// The window is reassembled as an unsigned pattern and reinterpreted as
/// two's-complement, so patterns with the top bit set come back negative.
pub fn read_i64_le(buf: &[u8], offset: usize) -> CodecResult<i64> {
    Ok(u64::from_le_bytes(window_at(buf, offset)?) as i64)
}

/// Reads an `i64` stored big-endian at `offset`.
pub fn read_i64_be(buf: &[u8], offset: usize) -> CodecResult<i64> {
    Ok(u64::from_be_bytes(window_at(buf, offset)?) as i64)
}

/// Copies the 8-byte window at `offset` after bounds-checking it.
fn window_at(buf: &[u8], offset: usize) -> CodecResult<[u8; WINDOW]> {
    check_window(buf, offset)?;
    let mut window = [0u8; WINDOW];
    window.copy_from_slice(&buf[offset..offset + WINDOW]);
    Ok(window)
}
