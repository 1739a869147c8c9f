//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod generate;

#[derive(Parser)]
#[command(
    name = "fabriq",
    about = "Generate a project from a natural-language description",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Describe a project and let the model build its files")]
    Generate(generate::GenerateArgs),
}
