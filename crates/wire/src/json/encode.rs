//! JSON encoding of records
//!
//! Fields are emitted in declared order under their interchange names:
//! - Int, Float, Bool, String: native JSON
//! - Timestamp: string, see [`format_timestamp`]
//! - Vector: array of numbers, exactly `dimension` long
//! - Null (optional fields only): `null`

use super::timestamp::format_timestamp;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use vecrecord_core::{extract, EncodeError, Record, RecordSchema, Value};

/// Interchange payload: `(interchange name, value)` pairs in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Value)>,
}

impl Payload {
    /// Entries in emission order
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Value under an interchange name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Render as compact JSON text
    pub fn to_json(&self) -> Result<String, EncodeError> {
        serde_json::to_string(self).map_err(|e| EncodeError::Serialization(e.to_string()))
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, &WireValue(value))?;
        }
        map.end()
    }
}

struct WireValue<'a>(&'a Value);

impl Serialize for WireValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => serializer.serialize_str(&format_timestamp(ts)),
            Value::Vector(v) => serializer.collect_seq(v.iter()),
        }
    }
}

/// Read and validate a record into a payload
pub fn encode_payload<R: Record + ?Sized>(
    schema: &RecordSchema,
    record: &R,
) -> Result<Payload, EncodeError> {
    let values = extract(schema, record)?;
    let entries = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| (schema.interchange_name_at(i).to_string(), value))
        .collect();
    Ok(Payload { entries })
}

/// Encode a record to JSON text
pub fn encode_json<R: Record + ?Sized>(
    schema: &RecordSchema,
    record: &R,
) -> Result<String, EncodeError> {
    encode_payload(schema, record)?.to_json()
}
