//! Schema-bound JSON codec

use super::decode::{decode_json, decode_json_with_constructor};
use super::encode::{encode_json, encode_payload, Payload};
use std::sync::Arc;
use vecrecord_core::{DecodeError, EncodeError, ImmutableRecord, MutableRecord, Record, RecordSchema};

/// JSON codec bound to one schema
///
/// Cloning is cheap; clones share the schema. A codec can be used from many
/// threads at once since every call works on its own payload.
#[derive(Debug, Clone)]
pub struct Codec {
    schema: Arc<RecordSchema>,
}

impl Codec {
    /// Bind a codec to a schema
    pub fn new(schema: RecordSchema) -> Self {
        Codec {
            schema: Arc::new(schema),
        }
    }

    /// Bind a codec to an already shared schema
    pub fn shared(schema: Arc<RecordSchema>) -> Self {
        Codec { schema }
    }

    /// The bound schema
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Encode a record to JSON text
    pub fn encode<R: Record + ?Sized>(&self, record: &R) -> Result<String, EncodeError> {
        encode_json(&self.schema, record)
    }

    /// Encode a record to an interchange payload
    pub fn encode_payload<R: Record + ?Sized>(&self, record: &R) -> Result<Payload, EncodeError> {
        encode_payload(&self.schema, record)
    }

    /// Decode JSON text into a mutable record
    pub fn decode<R: MutableRecord>(&self, json: &str) -> Result<R, DecodeError> {
        decode_json(&self.schema, json)
    }

    /// Decode JSON text through the designated constructor
    pub fn decode_with_constructor<R: ImmutableRecord>(&self, json: &str) -> Result<R, DecodeError> {
        decode_json_with_constructor(&self.schema, json)
    }
}
