use clap::{Parser, Subcommand};

use super::commands::run::RunCommand;

#[derive(Parser)]
#[command(name = "stylegrid")]
#[command(version)]
#[command(about = "A single-screen showcase of grid containers and composable style modifiers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the showcase screen (default)
    Run(RunCommand),
}
