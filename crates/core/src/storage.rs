//! Fixed-schema storage representation
//!
//! A [`StorageRecord`] is what a vector store collaborator consumes: the key,
//! the data fields by declared name, and the embedding. Shapes are validated
//! exactly as for interchange encoding.

use crate::error::{DecodeError, EncodeError};
use crate::record::{extract, FieldValues, ImmutableRecord, MutableRecord, Record};
use crate::schema::{FieldRole, RecordSchema};
use crate::value::Value;
use tracing::trace;

/// A record split by role
#[derive(Debug, Clone, PartialEq)]
pub struct StorageRecord {
    /// Key value
    pub key: Value,
    /// Data fields as `(declared name, value)`, in declared order
    pub data: Vec<(String, Value)>,
    /// Embedding, when the schema declares a vector field
    pub vector: Option<Vec<f32>>,
}

/// Split a record into its storage representation
pub fn to_storage<R: Record + ?Sized>(
    schema: &RecordSchema,
    record: &R,
) -> Result<StorageRecord, EncodeError> {
    let values = extract(schema, record)?;

    let mut key = Value::Null;
    let mut data = Vec::new();
    let mut vector = None;

    for (desc, value) in schema.fields().iter().zip(values) {
        match desc.role() {
            FieldRole::Key => key = value,
            FieldRole::Data => data.push((desc.name().to_string(), value)),
            FieldRole::Vector => {
                if let Value::Vector(v) = value {
                    vector = Some(v);
                }
            }
        }
    }

    Ok(StorageRecord { key, data, vector })
}

/// Rebuild a mutable record from its storage representation
pub fn from_storage<R: MutableRecord>(
    schema: &RecordSchema,
    stored: StorageRecord,
) -> Result<R, DecodeError> {
    gather(schema, stored)?.into_mutable()
}

/// Rebuild an immutable record through its designated constructor
pub fn from_storage_with_constructor<R: ImmutableRecord>(
    schema: &RecordSchema,
    stored: StorageRecord,
) -> Result<R, DecodeError> {
    gather(schema, stored)?.construct()
}

fn gather(schema: &RecordSchema, stored: StorageRecord) -> Result<FieldValues<'_>, DecodeError> {
    let mut values = FieldValues::new(schema);

    if !stored.key.is_null() {
        values.insert(schema.key_index(), stored.key)?;
    }

    for (name, value) in stored.data {
        let index = schema
            .fields()
            .iter()
            .position(|f| f.name() == name && f.role() == FieldRole::Data);
        match index {
            Some(index) => values.insert(index, value)?,
            None => trace!(field = %name, "skipping unknown stored field"),
        }
    }

    if let Some(v) = stored.vector {
        let index = schema
            .fields()
            .iter()
            .position(|f| f.role() == FieldRole::Vector)
            .ok_or_else(|| {
                DecodeError::MalformedPayload("stored vector for a schema without one".into())
            })?;
        values.insert(index, Value::Vector(v))?;
    }

    Ok(values)
}
