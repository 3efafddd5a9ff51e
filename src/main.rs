// Binary entry point - import modules directly
mod cli;
mod commands;
mod core;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli.command.execute()?;

    Ok(())
}
