//! Domain models for the grocery list
//!
//! Contains the list types and format tokens without any I/O concerns.

mod item;
mod format;

pub use item::{GroceryItem, GroceryList, ItemError};
pub use format::{Format, FormatError};
