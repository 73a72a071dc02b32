//! Codec entry points reporting the unified [`Error`](crate::Error).

use crate::error::Result;
use vecrecord_core::{ImmutableRecord, MutableRecord, Record, RecordSchema, StorageRecord};

/// Encode a record to JSON text.
pub fn encode<R: Record + ?Sized>(schema: &RecordSchema, record: &R) -> Result<String> {
    Ok(vecrecord_wire::encode_json(schema, record)?)
}

/// Decode JSON text into a mutable record.
pub fn decode<R: MutableRecord>(schema: &RecordSchema, json: &str) -> Result<R> {
    Ok(vecrecord_wire::decode_json(schema, json)?)
}

/// Decode JSON text into an immutable record through its designated constructor.
pub fn decode_with_constructor<R: ImmutableRecord>(schema: &RecordSchema, json: &str) -> Result<R> {
    Ok(vecrecord_wire::decode_json_with_constructor(schema, json)?)
}

/// Split a record into its vector-store representation.
pub fn to_storage<R: Record + ?Sized>(schema: &RecordSchema, record: &R) -> Result<StorageRecord> {
    Ok(vecrecord_core::to_storage(schema, record)?)
}

/// Rebuild a mutable record from its vector-store representation.
pub fn from_storage<R: MutableRecord>(schema: &RecordSchema, stored: StorageRecord) -> Result<R> {
    Ok(vecrecord_core::from_storage(schema, stored)?)
}

/// Rebuild an immutable record from its vector-store representation.
pub fn from_storage_with_constructor<R: ImmutableRecord>(
    schema: &RecordSchema,
    stored: StorageRecord,
) -> Result<R> {
    Ok(vecrecord_core::from_storage_with_constructor(schema, stored)?)
}

/// Describe the storage layout of a schema for a vector index.
pub fn storage_definition(schema: &RecordSchema) -> String {
    vecrecord_wire::encode_storage_definition(schema)
}

/// Encode an error in its wire form.
pub fn error_to_json(error: &crate::Error) -> String {
    vecrecord_wire::encode_error(error)
}
