#![no_main]

use fixed64::{
    read_i64_be, read_i64_le, read_u64_be, read_u64_le, write_i64_be, write_i64_le, write_u64_be,
    write_u64_le,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }
    let op = data[0] % 4;
    let offset = usize::from(data[1]);
    let value = i128::from_le_bytes(data[2..18].try_into().unwrap());

    let mut buf = [0u8; 64];
    let before = buf;

    // A write either succeeds, returns the advanced offset, and round-trips,
    // or fails and leaves the buffer untouched.
    let result = match op {
        0 => write_u64_le(&mut buf, value, offset)
            .map(|next| (next, i128::from(read_u64_le(&buf, offset).unwrap()))),
        1 => write_u64_be(&mut buf, value, offset)
            .map(|next| (next, i128::from(read_u64_be(&buf, offset).unwrap()))),
        2 => write_i64_le(&mut buf, value, offset)
            .map(|next| (next, i128::from(read_i64_le(&buf, offset).unwrap()))),
        _ => write_i64_be(&mut buf, value, offset)
            .map(|next| (next, i128::from(read_i64_be(&buf, offset).unwrap()))),
    };

    match result {
        Ok((next, decoded)) => {
            assert_eq!(next, offset + 8);
            assert_eq!(decoded, value);
        }
        Err(_) => assert_eq!(buf, before),
    }
});
