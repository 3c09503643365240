#![no_main]
use libfuzzer_sys::fuzz_target;

// Differential check: the Montgomery path must agree with the binary
// square-and-multiply oracle on every valid input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let x = i32::from_le_bytes(data[0..4].try_into().unwrap());
    let d = i32::from_le_bytes(data[4..8].try_into().unwrap()) & 0x7fff_ffff;
    let n = i32::from_le_bytes(data[8..12].try_into().unwrap()) & 0x7fff_ffff;

    // Montgomery needs an odd, positive modulus.
    let n = n | 1;

    let mont = modkit_math::montgomery(x, d, n as u32).unwrap();
    let bin = modkit_math::powm(x, d, n).unwrap();
    assert_eq!(mont, bin, "paths disagree at {x}^{d} mod {n}");
});
