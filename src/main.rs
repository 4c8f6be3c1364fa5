use anyhow::Result;
use clap::Parser;
use log::info;

use bc_codegen::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let args = Cli::parse();
    info!("Starting bc-codegen");

    cli::run(args)
}
