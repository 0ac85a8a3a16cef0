//! Grocery CLI - Manage a grocery list stored as JSON or CSV

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = grocery_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
