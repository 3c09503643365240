use clap::{Parser, Subcommand};

mod demo;
mod powm_cmd;
mod witness_cmd;

/// modkit command-line tool for modular-arithmetic operations.
#[derive(Parser)]
#[command(name = "modkit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference demonstration triples over modulus 43.
    Demo,
    /// Compute base^exponent mod modulus via both exponentiation paths.
    Powm {
        /// Base.
        #[arg(short = 'a', long)]
        base: i32,
        /// Exponent (non-negative).
        #[arg(short = 'd', long)]
        exponent: i32,
        /// Modulus (positive; odd for the Montgomery path).
        #[arg(short = 'n', long)]
        modulus: i32,
    },
    /// Check whether a base is a Fermat witness proving a number composite.
    Witness {
        /// Witness base.
        #[arg(short = 'a', long, default_value_t = 2)]
        base: i32,
        /// Number under test.
        #[arg(short = 'n', long)]
        number: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo => demo::run(),
        Commands::Powm {
            base,
            exponent,
            modulus,
        } => powm_cmd::run(base, exponent, modulus),
        Commands::Witness { base, number } => witness_cmd::run(base, number),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
