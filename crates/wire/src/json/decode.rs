//! JSON decoding of records
//!
//! Decoding runs in two phases. [`parse_payload`] reads the text and gathers
//! typed values for every known field; unknown fields are skipped. Only then
//! is the record produced, either by default-construct-and-assign or by one
//! call to the designated constructor.

use super::timestamp::parse_timestamp;
use serde_json::Value as Json;
use tracing::trace;
use vecrecord_core::{
    DecodeError, FieldDescriptor, FieldValues, ImmutableRecord, MutableRecord, RecordSchema,
    Value, ValueType,
};

/// Parse JSON text and gather values for the fields of `schema`
pub fn parse_payload<'s>(
    schema: &'s RecordSchema,
    json: &str,
) -> Result<FieldValues<'s>, DecodeError> {
    let parsed: Json =
        serde_json::from_str(json).map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;

    let map = match parsed {
        Json::Object(map) => map,
        other => {
            return Err(DecodeError::MalformedPayload(format!(
                "expected an object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let mut values = FieldValues::new(schema);
    for (name, raw) in map {
        let Some(index) = schema.index_for(&name) else {
            trace!(field = %name, "skipping unknown payload field");
            continue;
        };
        let value = from_json(&schema.fields()[index], raw, schema.options().numbers_from_strings)?;
        values.insert(index, value)?;
    }
    Ok(values)
}

/// Decode JSON text into a mutable record
///
/// Fails with `MissingRequiredField` when the key is absent.
pub fn decode_json<R: MutableRecord>(schema: &RecordSchema, json: &str) -> Result<R, DecodeError> {
    parse_payload(schema, json)?.into_mutable()
}

/// Decode JSON text into an immutable record through its designated constructor
///
/// Fails with `MissingConstructorArgument` before the constructor runs when
/// a non-optional parameter is absent.
pub fn decode_json_with_constructor<R: ImmutableRecord>(
    schema: &RecordSchema,
    json: &str,
) -> Result<R, DecodeError> {
    if schema.constructor().is_none() {
        return Err(DecodeError::NoDesignatedConstructor);
    }
    parse_payload(schema, json)?.construct()
}

fn from_json(
    desc: &FieldDescriptor,
    raw: Json,
    numbers_from_strings: bool,
) -> Result<Value, DecodeError> {
    let value = match (desc.value_type(), raw) {
        (_, Json::Null) => Value::Null,
        (ValueType::Int, Json::String(s)) if numbers_from_strings => match s.parse::<i64>() {
            Ok(i) => Value::Int(i),
            Err(_) => return Err(malformed(desc, &format!("{s:?} is not a 64-bit integer"))),
        },
        (ValueType::Float, Json::String(s)) if numbers_from_strings => {
            match s.parse::<f64>() {
                Ok(f) if f.is_finite() => Value::Float(f),
                _ => return Err(malformed(desc, &format!("{s:?} is not a finite float"))),
            }
        }
        (ValueType::Bool, Json::Bool(b)) => Value::Bool(b),
        (ValueType::Int, Json::Number(n)) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => return Err(malformed(desc, &format!("{n} is not a 64-bit integer"))),
        },
        (ValueType::Float, Json::Number(n)) => match n.as_f64() {
            Some(f) => Value::Float(f),
            None => return Err(malformed(desc, &format!("{n} is not a float"))),
        },
        (ValueType::String, Json::String(s)) => Value::String(s),
        (ValueType::Timestamp, Json::String(s)) => match parse_timestamp(&s) {
            Ok(ts) => Value::Timestamp(ts),
            Err(e) => return Err(malformed(desc, &format!("invalid timestamp {s:?}: {e}"))),
        },
        (ValueType::FloatVector, Json::Array(items)) => Value::Vector(vector_from_json(desc, items)?),
        (expected, other) => {
            return Err(malformed(
                desc,
                &format!("expected {expected}, got {}", json_type_name(&other)),
            ))
        }
    };
    Ok(value)
}

fn vector_from_json(desc: &FieldDescriptor, items: Vec<Json>) -> Result<Vec<f32>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let f = item
                .as_f64()
                .ok_or_else(|| malformed(desc, &format!("non-numeric entry at index {i}")))?;
            let f = f as f32;
            if f.is_finite() {
                Ok(f)
            } else {
                Err(malformed(desc, &format!("entry at index {i} overflows f32")))
            }
        })
        .collect()
}

fn malformed(desc: &FieldDescriptor, detail: &str) -> DecodeError {
    DecodeError::MalformedPayload(format!("field {}: {}", desc.name(), detail))
}

fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
