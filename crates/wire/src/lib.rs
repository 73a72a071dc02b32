//! Wire encoding for vecrecord
//!
//! This crate implements the interchange contract for records described by a
//! [`RecordSchema`](vecrecord_core::RecordSchema).
//!
//! ## Wire Encoding Rules
//!
//! | Field Type | JSON Encoding |
//! |------------|--------------|
//! | int | number |
//! | float | number (finite only) |
//! | bool | `true`/`false` |
//! | string | `"..."` |
//! | timestamp | `"2020-09-06T11:31:01.923395-07:00"` |
//! | float_vector | `[...]`, exactly `dimension` numbers |
//! | absent optional | `null` |
//!
//! Fields are emitted in declared order under their interchange names.
//! Unknown payload fields are ignored on decode.
//!
//! ## Examples
//!
//! ```
//! use vecrecord_core::{MutableRecord, Record, RecordSchema, Value, ValueType, WrongType};
//! use vecrecord_wire::{decode_json, encode_json};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tag {
//!     id: i64,
//!     label: String,
//! }
//!
//! impl Record for Tag {
//!     fn field(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "id" => Some(self.id.into()),
//!             "label" => Some(self.label.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl MutableRecord for Tag {
//!     fn set_field(&mut self, name: &str, value: Value) -> Result<(), WrongType> {
//!         match name {
//!             "id" => self.id = value.try_into()?,
//!             "label" => self.label = value.try_into()?,
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let schema = RecordSchema::builder()
//!     .key("id", ValueType::Int)
//!     .data("label", ValueType::String)
//!     .build()
//!     .unwrap();
//!
//! let tag = Tag { id: 42, label: "rust".into() };
//! let json = encode_json(&schema, &tag).unwrap();
//! assert_eq!(json, r#"{"id":42,"label":"rust"}"#);
//!
//! let decoded: Tag = decode_json(&schema, &json).unwrap();
//! assert_eq!(decoded, tag);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_json, decode_json_with_constructor, encode_error, encode_json, encode_payload,
    encode_storage_definition, format_timestamp, parse_payload, parse_timestamp, Codec, Payload,
};
