//! Modular exponentiation command.

use modkit_math::{montgomery, powm};

pub fn run(a: i32, d: i32, n: i32) -> Result<(), Box<dyn std::error::Error>> {
    let bin = powm(a, d, n)?;

    // The Montgomery path needs an odd modulus; fall back to the binary
    // result alone when it does not apply.
    if n % 2 == 1 {
        let mont = montgomery(a, d, n as u32)?;
        println!("{a} ^ {d} mod {n} = {mont} (montgomery) {bin} (binary)");
    } else {
        println!("{a} ^ {d} mod {n} = {bin} (binary; modulus even, montgomery skipped)");
    }

    Ok(())
}
