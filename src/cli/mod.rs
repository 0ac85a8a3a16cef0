//! # Command-Line Interface
//!
//! Argument parsing, command dispatch and console output.
//!
//! ## Usage
//!
//! ```bash
//! grocery -s list.json -f json add eggs 12
//! grocery -s list.json -f json list
//! grocery -s list.json -f json remove eggs
//! grocery -s list.json -f json format csv   # writes list.csv
//! ```
//!
//! `--source` and `--format` are both required; the format names how the
//! source file is read and written.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod command;
mod error;
mod output;

pub use app::{execute, run, Cli};
pub use command::{Command, CommandProcessor};
pub use error::UsageError;
pub use output::Output;
