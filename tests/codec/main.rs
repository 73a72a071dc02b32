//! Codec Test Suite
//!
//! End-to-end tests for the vecrecord facade: schema registration, JSON
//! encode/decode for mutable and constructor-built records, and the
//! vector-store representation.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all codec tests
//! cargo test --test codec
//!
//! # Run round-trip properties only
//! cargo test --test codec round_trip::
//! ```

use once_cell::sync::Lazy;
use vecrecord::prelude::*;

pub mod scenarios;
pub mod schema;
pub mod storage;

// =============================================================================
// SHARED TEST FIXTURES
// =============================================================================

/// A vector-store record: key, two data fields, a 384-dim cosine vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudService {
    pub key: i64,
    pub name: String,
    pub description: String,
    pub vector: Vec<f32>,
}

impl Record for CloudService {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "Key" => Some(self.key.into()),
            "Name" => Some(self.name.as_str().into()),
            "Description" => Some(self.description.as_str().into()),
            "Vector" => Some(self.vector.clone().into()),
            _ => None,
        }
    }
}

impl MutableRecord for CloudService {
    fn set_field(&mut self, name: &str, value: Value) -> std::result::Result<(), WrongType> {
        match name {
            "Key" => self.key = value.try_into()?,
            "Name" => self.name = value.try_into()?,
            "Description" => self.description = value.try_into()?,
            "Vector" => self.vector = value.try_into()?,
            _ => {}
        }
        Ok(())
    }
}

pub static CLOUD_SERVICE: Lazy<RecordSchema> = Lazy::new(|| {
    RecordSchema::builder()
        .key("Key", ValueType::Int)
        .data("Name", ValueType::String)
        .data("Description", ValueType::String)
        .vector("Vector", 384, DistanceMetric::Cosine)
        .build()
        .expect("cloud service schema")
});

/// An immutable record with no setters, built only through its constructor
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    date: DateTime<FixedOffset>,
    temperature_c: i32,
    summary: String,
}

impl Forecast {
    pub fn new(date: DateTime<FixedOffset>, temperature_c: i32, summary: String) -> Self {
        Forecast {
            date,
            temperature_c,
            summary,
        }
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl Record for Forecast {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "Date" => Some(self.date.into()),
            "TemperatureC" => Some(self.temperature_c.into()),
            "Summary" => Some(self.summary.as_str().into()),
            _ => None,
        }
    }
}

impl ImmutableRecord for Forecast {
    fn construct(mut args: ConstructorArgs) -> std::result::Result<Self, vecrecord::DecodeError> {
        Ok(Forecast::new(
            args.take("date")?,
            args.take("temperatureC")?,
            args.take("summary")?,
        ))
    }
}

pub static FORECAST: Lazy<RecordSchema> = Lazy::new(|| {
    RecordSchema::builder()
        .key("Date", ValueType::Timestamp)
        .field(FieldDescriptor::data("TemperatureC", ValueType::Int).rename("celsius"))
        .data("Summary", ValueType::String)
        .options(SchemaOptions::web())
        .constructor(Constructor::new(["date", "temperatureC", "summary"]))
        .build()
        .expect("forecast schema")
});

/// A CloudService with every vector component set to `fill`
pub fn service(key: i64, name: &str, fill: f32) -> CloudService {
    CloudService {
        key,
        name: name.to_string(),
        description: format!("A {}", name.to_lowercase()),
        vector: vec![fill; 384],
    }
}
