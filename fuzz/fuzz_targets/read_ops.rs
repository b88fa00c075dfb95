#![no_main]

use fixed64::{read_i64_be, read_i64_le, read_u64_be, read_u64_le};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Use input bytes to drive a bounded sequence of reads at arbitrary
    // offsets; none of them may panic, whatever the buffer looks like.
    let mut idx = 0usize;
    while idx + 2 <= data.len() && idx < 1024 {
        let op = data[idx] % 4;
        let offset = usize::from(data[idx + 1]);
        idx += 2;
        let buf = &data[idx..];

        match op {
            0 => {
                let _ = read_u64_le(buf, offset);
            }
            1 => {
                let _ = read_u64_be(buf, offset);
            }
            2 => {
                let _ = read_i64_le(buf, offset);
            }
            _ => {
                let _ = read_i64_be(buf, offset);
            }
        }
    }
});
