//! Command handler: read the metadata file, run the pipeline, write the
//! generated module.

use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::fs;

use crate::generate::{Generator, GeneratorConfig, TypeScriptGenerator};
use crate::metadata;

use super::Cli;

pub fn run(args: Cli) -> Result<()> {
    if !args.metadata_file.exists() {
        anyhow::bail!("Metadata file does not exist: {}", args.metadata_file.display());
    }

    let generator: Box<dyn Generator> = match args.lang.as_str() {
        "typescript" => Box::new(TypeScriptGenerator::new(GeneratorConfig::default())),
        other => anyhow::bail!("Unsupported language: {}", other),
    };

    println!(
        "📄 Reading metadata from: {}",
        args.metadata_file.display().to_string().cyan()
    );

    let metadata_xml = fs::read_to_string(&args.metadata_file)
        .with_context(|| format!("Failed to read metadata file: {}", args.metadata_file.display()))?;

    let model = metadata::parse(&metadata_xml).context("Failed to parse metadata")?;
    info!(
        "Parsed {} entity types from {}",
        model.schema.entity_types.len(),
        args.metadata_file.display()
    );

    let output = generator.generate(&model).context("Failed to generate schemas")?;

    fs::write(&args.out, &output)
        .with_context(|| format!("Failed to write output file: {}", args.out.display()))?;

    println!("✅ {} {}", "Generated".green(), args.out.display());
    Ok(())
}
