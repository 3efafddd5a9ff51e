use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands::{animals, extremes};

#[derive(Parser)]
#[command(name = "praktikum")]
#[command(about = "A Rust-based coursework exercise runner")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Extremes(args) => {
                extremes::handle_extremes_command(&args)?;
            }
            Commands::Animals(args) => {
                animals::handle_animals_command(&args)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sum the negative elements between an array's max and min
    Extremes(ExtremesArgs),

    /// Demonstrate the animal hierarchy
    Animals(AnimalsArgs),
}

#[derive(Args)]
pub struct ExtremesArgs {
    #[arg(
        help = "Array elements; defaults to the classroom example array",
        allow_negative_numbers = true
    )]
    pub values: Vec<String>,

    #[arg(short, long)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct AnimalsArgs {
    #[arg(long, default_value = "Generic", help = "Name for the base animal")]
    pub animal: String,

    #[arg(long, default_value = "Buddy", help = "Name for the dog")]
    pub dog: String,
}

#[derive(clap::ValueEnum, Clone)]
pub enum ReportFormat {
    Plain,
    Detailed,
    Json,
}
