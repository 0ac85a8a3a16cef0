//! CSV codec
//!
//! One `name;quantity` line per item under a fixed header. Fields are not
//! quoted, so a name containing `;` or a line break does not survive a
//! write/read cycle.

use super::codec::{DecodeWarning, Decoded};
use crate::domain::{GroceryItem, GroceryList};

const HEADER: &str = "name;quantity";

const SEPARATOR: char = ';';

pub(super) fn decode(content: &str) -> Decoded {
    let mut decoded = Decoded::default();

    // First line is the header, whatever it says
    for (index, line) in content.lines().enumerate().skip(1) {
        let mut fields: Vec<&str> = line.split(SEPARATOR).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.len() < 2 {
            continue;
        }

        match GroceryItem::parse(fields[0], fields[1]) {
            Ok(item) => decoded.items.add(item),
            Err(e) => decoded.warnings.push(DecodeWarning::csv_line(index + 1, e)),
        }
    }

    decoded
}

pub(super) fn encode(list: &GroceryList) -> String {
    let mut content = String::with_capacity(HEADER.len() + 1 + list.len() * 16);
    content.push_str(HEADER);
    content.push('\n');

    for item in list {
        content.push_str(&item.name);
        content.push(SEPARATOR);
        content.push_str(&item.quantity.to_string());
        content.push('\n');
    }

    content
}
