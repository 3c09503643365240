#![no_main]
use libfuzzer_sys::fuzz_target;

// The Bézout identity must hold for every integer pair.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let a = i32::from_le_bytes(data[0..4].try_into().unwrap());
    let b = i32::from_le_bytes(data[4..8].try_into().unwrap());

    let (d, x, y) = modkit_math::extended_euclidean(a, b);
    assert_eq!(
        a as i64 * x as i64 + b as i64 * y as i64,
        d as i64,
        "bezout identity failed for ({a}, {b})"
    );
});
