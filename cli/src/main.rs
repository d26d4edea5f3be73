use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::generate;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            output,
            count,
            bit_length,
            max_shift,
            bitwise_format,
            seed,
        } => generate::generate_file(
            output,
            oracle::GeneratorConfig {
                count: *count,
                bit_length: *bit_length,
                max_shift: *max_shift,
                seed: *seed,
            },
            bitwise_format,
        ),
    }
}
