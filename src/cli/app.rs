//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::command::{Command, CommandProcessor};
use super::error::UsageError;
use super::output::Output;
use crate::domain::Format;
use crate::storage::ListStore;

#[derive(Parser, Debug)]
#[command(name = "grocery")]
#[command(author, version, about = "Manage a grocery list stored as JSON or CSV")]
pub struct Cli {
    /// File holding the grocery list
    #[arg(long, short = 's')]
    pub source: PathBuf,

    /// File format (json or csv)
    #[arg(long, short = 'f')]
    pub format: Option<Format>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Command and its arguments:
    ///   add <name> <quantity> | list | remove <name> | format <json|csv>
    #[arg(value_name = "COMMAND", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            e.print()?;
            return Err(UsageError::ArgumentParsing.into());
        }
    };

    execute(cli)
}

/// Validates parsed arguments and runs the command
pub fn execute(cli: Cli) -> Result<()> {
    let output = Output::new(cli.verbose);

    let format = cli.format.ok_or(UsageError::MissingFormat)?;
    let command = Command::parse(&cli.args)?;

    output.verbose_ctx(
        command.name(),
        &format!("Using {} as {}", cli.source.display(), format),
    );

    let processor = CommandProcessor::new(ListStore::new(cli.source, format), &output);
    processor.execute(command)?;

    output.verbose("Command completed successfully");
    Ok(())
}
