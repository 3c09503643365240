//! Fermat witness command.

use modkit_math::witness;

pub fn run(a: i32, n: i32) -> Result<(), Box<dyn std::error::Error>> {
    if witness(a, n)? {
        println!("{n} is composite (witness {a}: {a}^{} mod {n} != 1)", n - 1);
    } else {
        println!("{n} passes base {a} ({a}^{} mod {n} = 1); not proof of primality", n - 1);
    }
    Ok(())
}
