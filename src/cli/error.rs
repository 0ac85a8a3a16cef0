//! Usage errors reported before any file is touched

use thiserror::Error;

use crate::domain::{FormatError, ItemError};

#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    #[error("Failed to parse arguments")]
    ArgumentParsing,

    #[error("Missing file format: pass --format json or --format csv")]
    MissingFormat,

    #[error("Missing command. Expected one of: add, list, remove, format")]
    MissingCommand,

    #[error("Missing arguments. Usage: {0}")]
    MissingArguments(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Item(#[from] ItemError),
}
