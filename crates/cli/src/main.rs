//! qreport CLI - CI quality report generator

use anyhow::Result;
use clap::Parser;
use qreport_cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { ref path }) => {
            commands::init::run(path.as_deref())?;
        }
        Some(Commands::Generate) | None => {
            // Default command is generate with the current directory
            commands::generate::run(&cli)?;
        }
    }

    Ok(())
}
