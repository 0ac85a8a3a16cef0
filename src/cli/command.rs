//! List commands
//!
//! | Command | Arguments | Saves |
//! |---------|-----------|-------|
//! | `add` | `<name> <quantity>` | yes |
//! | `list` | none | no |
//! | `remove` | `<name>` | yes, even when nothing matched |
//! | `format` | `<json\|csv>` | to a new file next to the source |

use anyhow::Result;

use super::error::UsageError;
use super::output::Output;
use crate::domain::{Format, GroceryItem, GroceryList};
use crate::storage::ListStore;

/// A parsed command with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(GroceryItem),
    List,
    Remove { name: String },
    Convert { format: Format },
}

impl Command {
    /// Parses the positional arguments: a command name followed by its operands
    ///
    /// Extra trailing operands are ignored.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let (name, operands) = args.split_first().ok_or(UsageError::MissingCommand)?;

        match name.as_str() {
            "add" => match operands {
                [item, quantity, ..] => Ok(Command::Add(GroceryItem::parse(item, quantity)?)),
                _ => Err(UsageError::MissingArguments("add <name> <quantity>")),
            },
            "list" => Ok(Command::List),
            "remove" => match operands {
                [item, ..] => Ok(Command::Remove { name: item.clone() }),
                _ => Err(UsageError::MissingArguments("remove <name>")),
            },
            "format" => match operands {
                [format, ..] => Ok(Command::Convert {
                    format: format.parse()?,
                }),
                _ => Err(UsageError::MissingArguments("format <json|csv>")),
            },
            other => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }

    /// Returns the command name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::List => "list",
            Command::Remove { .. } => "remove",
            Command::Convert { .. } => "format",
        }
    }
}

/// Runs commands against a single list file
pub struct CommandProcessor<'a> {
    store: ListStore,
    output: &'a Output,
}

impl<'a> CommandProcessor<'a> {
    pub fn new(store: ListStore, output: &'a Output) -> Self {
        Self { store, output }
    }

    /// Loads the current list, reporting skipped entries as warnings
    pub fn load(&self) -> Result<GroceryList> {
        self.output.verbose_ctx(
            "load",
            &format!(
                "Reading {} list from {}",
                self.store.format(),
                self.store.path().display()
            ),
        );

        let decoded = self.store.load()?;

        if decoded.legacy {
            self.output
                .verbose_ctx("load", "File uses the legacy string format");
        }
        for warning in &decoded.warnings {
            self.output.warn(&warning.to_string());
        }

        self.output.verbose_ctx(
            "load",
            &format!(
                "Loaded {} item(s), skipped {}",
                decoded.items.len(),
                decoded.warnings.len()
            ),
        );

        Ok(decoded.items)
    }

    /// Loads the list, applies the command and writes back when it changed
    pub fn execute(&self, command: Command) -> Result<()> {
        let mut list = self.load()?;

        match command {
            Command::Add(item) => {
                self.output
                    .verbose_ctx("add", &format!("Adding {}", item));
                list.add(item);
                self.save(&self.store, &list)
            }
            Command::List => {
                for item in &list {
                    self.output.success(&item.to_string());
                }
                Ok(())
            }
            Command::Remove { name } => {
                let removed = list.remove_named(&name);
                self.output.verbose_ctx(
                    "remove",
                    &format!("Removed {} item(s) named '{}'", removed, name),
                );
                self.save(&self.store, &list)
            }
            Command::Convert { format } => {
                let target = self.store.converted(format);
                self.save(&target, &list)?;
                self.output.success(&format!(
                    "Converted {} to {} ({})",
                    self.store.path().display(),
                    target.path().display(),
                    format
                ));
                Ok(())
            }
        }
    }

    fn save(&self, store: &ListStore, list: &GroceryList) -> Result<()> {
        self.output.verbose_ctx(
            "save",
            &format!(
                "Writing {} item(s) as {} to {}",
                list.len(),
                store.format(),
                store.path().display()
            ),
        );
        store.save(list)
    }
}
