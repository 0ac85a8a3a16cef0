//! JSON codec
//!
//! Current format is an array of `{"name": ..., "quantity": ...}` objects.
//! Files written by older versions hold an array of `"name: quantity"`
//! strings instead; those are still readable but never written.

use super::codec::{CodecError, DecodeWarning, Decoded};
use crate::domain::{GroceryItem, GroceryList};

/// Shape of a JSON list file
enum JsonShape {
    Records(Vec<GroceryItem>),
    Legacy(Vec<String>),
}

impl JsonShape {
    /// Record shape is tried first; the legacy shape only when that fails.
    fn classify(content: &str) -> Result<Self, CodecError> {
        let records_err = match serde_json::from_str::<Vec<GroceryItem>>(content) {
            Ok(records) => return Ok(JsonShape::Records(records)),
            Err(e) => e,
        };

        match serde_json::from_str::<Vec<String>>(content) {
            Ok(entries) => Ok(JsonShape::Legacy(entries)),
            Err(legacy_err) => Err(CodecError::InvalidJson {
                records: records_err,
                legacy: legacy_err,
            }),
        }
    }
}

pub(super) fn decode(content: &str) -> Result<Decoded, CodecError> {
    match JsonShape::classify(content)? {
        JsonShape::Records(records) => Ok(decode_records(records)),
        JsonShape::Legacy(entries) => Ok(decode_legacy(&entries)),
    }
}

fn decode_records(records: Vec<GroceryItem>) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, item) in records.into_iter().enumerate() {
        if item.name.trim().is_empty() {
            decoded.warnings.push(DecodeWarning::BlankRecord { index });
        } else {
            decoded.items.add(item);
        }
    }

    decoded
}

fn decode_legacy(entries: &[String]) -> Decoded {
    let mut decoded = Decoded {
        legacy: true,
        ..Decoded::default()
    };

    for entry in entries {
        let Some((name, quantity)) = entry.split_once(": ") else {
            decoded
                .warnings
                .push(DecodeWarning::legacy(entry, "expected 'name: quantity'"));
            continue;
        };

        match GroceryItem::parse(name, quantity) {
            Ok(item) => decoded.items.add(item),
            Err(e) => decoded.warnings.push(DecodeWarning::legacy(entry, e)),
        }
    }

    decoded
}

pub(super) fn encode(list: &GroceryList) -> Result<String, CodecError> {
    let mut content = serde_json::to_string_pretty(list.as_slice())?;
    content.push('\n');
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_records_in_order() {
        let content = r#"[{"name":"eggs","quantity":12},{"name":"milk","quantity":2}]"#;
        let decoded = decode(content).unwrap();

        assert!(!decoded.legacy);
        assert_eq!(
            decoded.items.as_slice(),
            &[GroceryItem::new("eggs", 12), GroceryItem::new("milk", 2)]
        );
    }

    #[test]
    fn blank_record_names_are_skipped() {
        let content = r#"[{"name":"","quantity":1},{"name":"milk","quantity":2},{"name":"  ","quantity":3}]"#;
        let decoded = decode(content).unwrap();

        assert_eq!(decoded.items.as_slice(), &[GroceryItem::new("milk", 2)]);
        assert_eq!(
            decoded.warnings,
            vec![
                DecodeWarning::BlankRecord { index: 0 },
                DecodeWarning::BlankRecord { index: 2 },
            ]
        );
    }

    #[test]
    fn decodes_empty_array() {
        let decoded = decode("[]").unwrap();
        assert!(decoded.items.is_empty());
        assert!(!decoded.legacy);
    }

    #[test]
    fn falls_back_to_legacy_strings() {
        let decoded = decode(r#"["milk: 2"]"#).unwrap();

        assert!(decoded.legacy);
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.items.as_slice(), &[GroceryItem::new("milk", 2)]);
    }

    #[test]
    fn legacy_skips_malformed_entries() {
        let content = r#"["milk: 2", "butter", "jam: lots", "bread: 1"]"#;
        let decoded = decode(content).unwrap();

        assert_eq!(
            decoded.items.as_slice(),
            &[GroceryItem::new("milk", 2), GroceryItem::new("bread", 1)]
        );
        assert_eq!(decoded.warnings.len(), 2);
        assert!(matches!(
            &decoded.warnings[0],
            DecodeWarning::LegacyEntry { entry, .. } if entry == "butter"
        ));
        assert!(matches!(
            &decoded.warnings[1],
            DecodeWarning::LegacyEntry { entry, .. } if entry == "jam: lots"
        ));
    }

    #[test]
    fn legacy_splits_on_first_separator() {
        let decoded = decode(r#"["a: 1: 2", "rice: -1"]"#).unwrap();

        assert_eq!(decoded.items.as_slice(), &[GroceryItem::new("rice", -1)]);
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn mixed_array_is_an_error() {
        let result = decode(r#"[{"name":"eggs","quantity":1}, "milk: 2"]"#);
        assert!(matches!(result, Err(CodecError::InvalidJson { .. })));
    }

    #[test]
    fn invalid_content_is_an_error() {
        assert!(decode("").is_err());
        assert!(decode("{not json").is_err());
        assert!(decode(r#"{"name":"eggs","quantity":1}"#).is_err());
        assert!(decode(r#"[{"name":"eggs","quantity":"many"}]"#).is_err());
    }

    #[test]
    fn encodes_records_as_array() {
        let list = GroceryList::from(vec![GroceryItem::new("eggs", 12)]);
        let content = encode(&list).unwrap();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!([{"name": "eggs", "quantity": 12}]));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn encodes_empty_list() {
        let content = encode(&GroceryList::new()).unwrap();
        assert_eq!(content.trim(), "[]");
    }
}
