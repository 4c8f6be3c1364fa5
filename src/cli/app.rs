use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bc-codegen")]
#[command(about = "Generates TypeScript zod schemas from Business Central OData metadata")]
pub struct Cli {
    /// Path to the EDMX metadata XML file
    #[arg(help = "Path to the EDMX metadata XML file")]
    pub metadata_file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "schema.ts")]
    pub out: PathBuf,

    /// Language to generate (typescript)
    #[arg(long, default_value = "typescript")]
    pub lang: String,
}
