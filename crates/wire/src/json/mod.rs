//! JSON wire encoding for vecrecord records
//!
//! - [`encode_json`] / [`decode_json`] / [`decode_json_with_constructor`]:
//!   schema-driven record codec
//! - [`Codec`]: the same operations bound to a shared schema
//! - [`encode_error`]: error wire form
//! - [`encode_storage_definition`]: storage layout for vector index collaborators

mod codec;
mod decode;
mod definition;
mod encode;
mod error;
mod timestamp;

pub use codec::Codec;
pub use decode::{decode_json, decode_json_with_constructor, parse_payload};
pub use definition::encode_storage_definition;
pub use encode::{encode_json, encode_payload, Payload};
pub use error::encode_error;
pub use timestamp::{format_timestamp, parse_timestamp};
