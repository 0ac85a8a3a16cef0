//! Format codec
//!
//! Stateless conversion between a [`GroceryList`] and file content. Decoding
//! is lenient per entry: malformed entries are dropped and reported as
//! [`DecodeWarning`]s, while structurally invalid content is a [`CodecError`].

use std::fmt;

use thiserror::Error;

use super::{csv, json};
use crate::domain::{Format, GroceryList, ItemError};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Content is neither a list of items ({records}) nor a list of legacy entries ({legacy})")]
    InvalidJson {
        records: serde_json::Error,
        legacy: serde_json::Error,
    },

    #[error("Failed to serialize list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An entry skipped while decoding
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeWarning {
    /// Legacy `"name: quantity"` string that could not be split or parsed
    LegacyEntry { entry: String, reason: String },
    /// CSV line (1-based, header included) whose fields were rejected
    CsvLine { line: usize, reason: String },
    /// JSON record (0-based position in the array) with a blank name
    BlankRecord { index: usize },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::LegacyEntry { entry, reason } => {
                write!(f, "Invalid item format '{}': {}", entry, reason)
            }
            DecodeWarning::CsvLine { line, reason } => {
                write!(f, "Invalid entry in CSV file at line {}: {}", line, reason)
            }
            DecodeWarning::BlankRecord { index } => {
                write!(f, "Invalid record at position {}: {}", index, ItemError::EmptyName)
            }
        }
    }
}

impl DecodeWarning {
    pub(crate) fn legacy(entry: &str, reason: impl fmt::Display) -> Self {
        DecodeWarning::LegacyEntry {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn csv_line(line: usize, err: ItemError) -> Self {
        DecodeWarning::CsvLine {
            line,
            reason: err.to_string(),
        }
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub items: GroceryList,
    pub warnings: Vec<DecodeWarning>,
    /// True when the content was read through the legacy string encoding
    pub legacy: bool,
}

/// Parses file content in the given format
pub fn decode(format: Format, content: &str) -> Result<Decoded, CodecError> {
    match format {
        Format::Json => json::decode(content),
        Format::Csv => Ok(csv::decode(content)),
    }
}

/// Renders a list as file content in the given format
pub fn encode(format: Format, list: &GroceryList) -> Result<String, CodecError> {
    match format {
        Format::Json => json::encode(list),
        Format::Csv => Ok(csv::encode(list)),
    }
}
