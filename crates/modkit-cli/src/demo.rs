//! Reference demonstration: three exponentiations over modulus 43,
//! printed with both paths side by side.

use modkit_math::{powm, MontgomeryCtx};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let n = 43;
    let ctx = MontgomeryCtx::new(n as u32)?;

    for (a, d) in [(32, 56), (35, 43), (23, 53)] {
        let mont = ctx.exp(a, d)?;
        let bin = powm(a, d, n)?;
        println!("{a} ^ {d} mod {n} = {mont} {bin}");
    }

    Ok(())
}
