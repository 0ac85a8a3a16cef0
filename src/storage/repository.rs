//! File-backed list store
//!
//! A store pairs a path with the format used to read and write it. Saving
//! rewrites the whole file in place; there is no temp file and rename, so an
//! interrupted write can leave a truncated file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::codec::{self, Decoded};
use crate::domain::{Format, GroceryList};

/// Store for a grocery list file
pub struct ListStore {
    path: PathBuf,
    format: Format,
}

impl ListStore {
    /// Creates a store for the given file and format
    pub fn new(path: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the format the file is read and written in
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns a store for the same list converted to another format
    pub fn converted(&self, format: Format) -> Self {
        Self::new(format.convert_path(&self.path), format)
    }

    /// Reads the list, treating a missing file as an empty list
    pub fn load(&self) -> Result<Decoded> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Decoded::default()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read list file: {}", self.path.display())
                })
            }
        };

        codec::decode(self.format, &content).with_context(|| {
            format!(
                "Failed to parse {} list file: {}",
                self.format,
                self.path.display()
            )
        })
    }

    /// Writes the list, replacing any previous content
    pub fn save(&self, list: &GroceryList) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = codec::encode(self.format, list).context("Failed to encode list")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write list file: {}", self.path.display()))?;

        Ok(())
    }
}
