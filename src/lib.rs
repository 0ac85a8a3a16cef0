//! Grocery CLI - A file-backed grocery list manager
//!
//! A list of named items with integer quantities lives in a single file,
//! stored either as JSON records or as semicolon-separated CSV. Each
//! invocation loads the file, applies one command and writes it back.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Format, GroceryItem, GroceryList};
pub use storage::ListStore;
