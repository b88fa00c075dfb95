//! Value-pattern generation and benchmarking for the fixbuf codec.
//!
//! Patterns are deterministic given a seed so benchmark runs are
//! reproducible across machines and CI. No RNG dependency: a 64-bit
//! integer mixer drives the sequences.

/// Deterministic 64-bit mixer (splitmix64 finalizer).
#[must_use]
pub const fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// `count` pseudo-random unsigned patterns derived from `seed`.
#[must_use]
pub fn unsigned_patterns(seed: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|i| mix(seed.wrapping_add(i))).collect()
}

/// `count` pseudo-random signed patterns derived from `seed`.
#[must_use]
pub fn signed_patterns(seed: u64, count: usize) -> Vec<i64> {
    unsigned_patterns(seed, count)
        .into_iter()
        .map(|bits| bits as i64)
        .collect()
}

/// Boundary and near-boundary values of the unsigned 64-bit domain.
#[must_use]
pub fn unsigned_edges() -> Vec<u64> {
    vec![0, 1, 0xFF, u64::from(u32::MAX), u64::MAX - 1, u64::MAX]
}

/// Boundary and near-boundary values of the signed 64-bit domain.
#[must_use]
pub fn signed_edges() -> Vec<i64> {
    vec![i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixer_is_deterministic() {
        assert_eq!(unsigned_patterns(7, 16), unsigned_patterns(7, 16));
        assert_ne!(unsigned_patterns(7, 16), unsigned_patterns(8, 16));
    }

    #[test]
    fn mixer_output_varies() {
        let values = unsigned_patterns(1, 64);
        let first = values[0];
        assert!(values.iter().any(|&v| v != first));
    }

    #[test]
    fn edges_roundtrip_through_codec() {
        let mut buf = [0u8; 8];
        for value in unsigned_edges() {
            fixed64::write_u64_be(&mut buf, i128::from(value), 0).unwrap();
            assert_eq!(fixed64::read_u64_be(&buf, 0).unwrap(), value);
        }
        for value in signed_edges() {
            fixed64::write_i64_le(&mut buf, i128::from(value), 0).unwrap();
            assert_eq!(fixed64::read_i64_le(&buf, 0).unwrap(), value);
        }
    }
}
