use anyhow::Result;
use clap::Parser;
use log::info;

use stylegrid::cli::commands::run::{RunCommand, run_command};
use stylegrid::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Log to file (truncated on each run) so the alternate screen stays clean
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("stylegrid.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("starting stylegrid");

    match cli.command {
        Some(Commands::Run(args)) => run_command(args),
        None => run_command(RunCommand::default()),
    }
}
