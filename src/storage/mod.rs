//! # Storage Layer
//!
//! Persistence for grocery lists in plain files.
//!
//! ## Storage Formats
//!
//! | Format | Layout | Example |
//! |--------|--------|---------|
//! | `json` | Array of records | `[{"name": "eggs", "quantity": 12}]` |
//! | `json` (legacy, read-only) | Array of strings | `["eggs: 12"]` |
//! | `csv` | Header line, then `name;quantity` lines | `name;quantity\neggs;12` |
//!
//! ## Key Types
//!
//! - [`ListStore`] - Load/save a list file in a chosen format
//! - [`decode`] / [`encode`] - Pure conversion between content and lists
//! - [`Decoded`] - Decoded items plus warnings for skipped entries

mod codec;
mod json;
mod csv;
mod repository;

pub use codec::{decode, encode, CodecError, DecodeWarning, Decoded};
pub use repository::ListStore;
