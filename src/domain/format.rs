//! Storage formats for grocery lists

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Invalid format: {0}. Must be 'json' or 'csv'")]
    Invalid(String),
}

/// On-disk representation of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Array of `{ "name", "quantity" }` records
    Json,
    /// `name;quantity` lines under a header
    Csv,
}

impl Format {
    /// Returns the token used on the command line and as file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }

    /// Returns the path a list converted to this format is written to
    ///
    /// Only the final path component is inspected: when it contains a `.`,
    /// everything after the last one is replaced by this format's extension,
    /// otherwise the extension is appended.
    pub fn convert_path(&self, path: &Path) -> PathBuf {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return path.join(format!(".{}", self.as_str())),
        };

        let new_name = match file_name.rfind('.') {
            Some(dot) => format!("{}.{}", &file_name[..dot], self.as_str()),
            None => format!("{}.{}", file_name, self.as_str()),
        };

        path.with_file_name(new_name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            other => Err(FormatError::Invalid(other.to_string())),
        }
    }
}
