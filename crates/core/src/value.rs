//! Value types for record fields
//!
//! `Value` is the in-memory form of a single field, independent of the
//! interchange format. Records hand values to the codec on encode and
//! receive them back on decode.
//!
//! ## Equality Rules
//!
//! - Different variants are NEVER equal (no type coercion)
//! - `Int(1)` != `Float(1.0)`
//! - Timestamps compare by instant, so the same moment at two offsets is equal
//! - Float uses IEEE-754 equality: `NaN != NaN`

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Semantic type tag of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// UTF-8 string
    String,
    /// Instant with a UTC offset
    Timestamp,
    /// Fixed-length sequence of 32-bit floats
    FloatVector,
}

impl ValueType {
    /// Lowercase name used in error messages and wire descriptions
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Timestamp => "timestamp",
            ValueType::FloatVector => "float_vector",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value, only valid for optional fields
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit IEEE-754 float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Instant with the offset it was observed at
    Timestamp(DateTime<FixedOffset>),
    /// Embedding vector
    Vector(Vec<f32>),
}

impl Value {
    /// The type tag of this value, `None` for `Null`
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(ValueType::Bool),
            Value::Int(_) => Some(ValueType::Int),
            Value::Float(_) => Some(ValueType::Float),
            Value::String(_) => Some(ValueType::String),
            Value::Timestamp(_) => Some(ValueType::Timestamp),
            Value::Vector(_) => Some(ValueType::FloatVector),
        }
    }

    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        self.value_type().map_or("null", |t| t.name())
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as vector slice
    pub fn as_vector(&self) -> Option<&[f32]> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }
}

/// A value could not be converted into the requested Rust type
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("expected {expected}, got {actual}")]
pub struct WrongType {
    /// Requested type
    pub expected: &'static str,
    /// Type actually held
    pub actual: &'static str,
}

impl WrongType {
    fn new(expected: &'static str, value: &Value) -> Self {
        WrongType {
            expected,
            actual: value.type_name(),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(WrongType::new("bool", &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(WrongType::new("int", &other)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => i32::try_from(i).map_err(|_| WrongType {
                expected: "int32",
                actual: "int64",
            }),
            other => Err(WrongType::new("int", &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(WrongType::new("float", &other)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(WrongType::new("string", &other)),
        }
    }
}

impl TryFrom<Value> for DateTime<FixedOffset> {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(WrongType::new("timestamp", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<f32> {
    type Error = WrongType;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Vector(v) => Ok(v),
            other => Err(WrongType::new("float_vector", &other)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::Vector(v)
    }
}

impl From<&[f32]> for Value {
    fn from(v: &[f32]) -> Self {
        Value::Vector(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
