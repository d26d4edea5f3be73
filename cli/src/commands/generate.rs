use std::fs;

use anyhow::{Context, Result};
use oracle::{Format, GeneratorConfig, VectorGenerator};

/// Generate a full suite and write it as pretty JSON.
///
/// The whole suite is generated before the output file is touched, so a
/// failed batch never leaves a partial vector file behind.
pub fn generate_file(output: &str, config: GeneratorConfig, bitwise_format: &str) -> Result<()> {
    let format: Format = bitwise_format
        .parse()
        .with_context(|| format!("Unrecognized bitwise format: {bitwise_format}"))?;

    let mut generator = VectorGenerator::new(config);
    let vectors = generator
        .generate_suite_in(format)
        .context("Vector generation failed")?;

    let json = serde_json::to_string_pretty(&vectors).context("Failed to serialize vectors")?;
    fs::write(output, json).with_context(|| format!("Failed to write {output}"))?;

    println!("Generated {} test vectors.", vectors.len());
    Ok(())
}
