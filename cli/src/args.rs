use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vlgen")]
#[command(about = "Test-vector generator for big-integer libraries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a JSON test-vector suite
    Generate {
        /// Output JSON file
        #[arg(short, long, default_value = "very_long_integer_test_vectors.json")]
        output: String,
        /// Vectors per operator
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Operand magnitude bit-length
        #[arg(long, default_value_t = 128)]
        bit_length: u64,
        /// Largest shift amount for << and >>
        #[arg(long, default_value_t = 16)]
        max_shift: u32,
        /// Encoding for bitwise and shift vectors: "hex" or "bin"
        #[arg(long, default_value = "hex")]
        bitwise_format: String,
        /// RNG seed for a reproducible suite
        #[arg(long)]
        seed: Option<u64>,
    },
}
