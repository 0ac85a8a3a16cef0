//! Grocery item domain model
//!
//! An item is a name paired with a quantity. Lists keep insertion order and
//! allow duplicate names; removal drops every entry sharing a name.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Quantity must be an integer, got '{0}'")]
    InvalidQuantity(String),
}

/// A single entry on the grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: i32,
}

impl GroceryItem {
    /// Creates an item without validation
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Builds an item from raw text fields
    ///
    /// The name must be non-blank and the quantity must parse as an integer.
    /// Any integer is accepted, zero and negatives included.
    pub fn parse(name: &str, quantity: &str) -> Result<Self, ItemError> {
        if name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }
        let quantity = quantity
            .parse::<i32>()
            .map_err(|_| ItemError::InvalidQuantity(quantity.to_string()))?;
        Ok(Self::new(name, quantity))
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.quantity)
    }
}

/// Ordered collection of grocery items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroceryList(Vec<GroceryItem>);

impl GroceryList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an item at the end
    pub fn add(&mut self, item: GroceryItem) {
        self.0.push(item);
    }

    /// Removes every item with exactly this name, returning how many went
    pub fn remove_named(&mut self, name: &str) -> usize {
        let len_before = self.0.len();
        self.0.retain(|item| item.name != name);
        len_before - self.0.len()
    }

    /// Returns true if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &GroceryItem> {
        self.0.iter()
    }

    /// Returns the items as a slice
    pub fn as_slice(&self) -> &[GroceryItem] {
        &self.0
    }
}

impl From<Vec<GroceryItem>> for GroceryList {
    fn from(items: Vec<GroceryItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<GroceryItem> for GroceryList {
    fn from_iter<I: IntoIterator<Item = GroceryItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GroceryList {
    type Item = &'a GroceryItem;
    type IntoIter = std::slice::Iter<'a, GroceryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> GroceryList {
        GroceryList::from(vec![
            GroceryItem::new("eggs", 12),
            GroceryItem::new("milk", 2),
            GroceryItem::new("eggs", 6),
        ])
    }

    #[test]
    fn parse_accepts_signed_quantities() {
        assert_eq!(GroceryItem::parse("flour", "0").unwrap().quantity, 0);
        assert_eq!(GroceryItem::parse("flour", "-3").unwrap().quantity, -3);
        assert_eq!(GroceryItem::parse("flour", "+5").unwrap().quantity, 5);
    }

    #[test]
    fn parse_rejects_non_integer_quantity() {
        assert_eq!(
            GroceryItem::parse("bread", "notanumber"),
            Err(ItemError::InvalidQuantity("notanumber".to_string()))
        );
        assert!(GroceryItem::parse("bread", "1.5").is_err());
        assert!(GroceryItem::parse("bread", " 2").is_err());
        assert!(GroceryItem::parse("bread", "99999999999").is_err());
    }

    #[test]
    fn parse_rejects_blank_name() {
        assert_eq!(GroceryItem::parse("", "1"), Err(ItemError::EmptyName));
        assert_eq!(GroceryItem::parse("   ", "1"), Err(ItemError::EmptyName));
    }

    #[test]
    fn display_uses_name_colon_quantity() {
        assert_eq!(GroceryItem::new("eggs", 12).to_string(), "eggs: 12");
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = GroceryList::new();
        list.add(GroceryItem::new("b", 1));
        list.add(GroceryItem::new("a", 2));

        let names: Vec<_> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn remove_named_drops_all_matches() {
        let mut list = sample_list();

        assert_eq!(list.remove_named("eggs"), 2);
        assert_eq!(list.as_slice(), &[GroceryItem::new("milk", 2)]);
    }

    #[test]
    fn remove_named_is_exact_and_case_sensitive() {
        let mut list = sample_list();

        assert_eq!(list.remove_named("Eggs"), 0);
        assert_eq!(list.remove_named("egg"), 0);
        assert_eq!(list.len(), 3);
    }
}
