//! Convenient imports for vecrecord.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use vecrecord::prelude::*;
//!
//! let schema = RecordSchema::builder()
//!     .key("Key", ValueType::Int)
//!     .vector("Vector", 384, DistanceMetric::Cosine)
//!     .build()?;
//! ```

// Entry points
pub use crate::codec::{decode, decode_with_constructor, encode};

// Error handling
pub use crate::error::{Error, Result};

// Schema registration
pub use crate::types::{Constructor, FieldDescriptor, RecordSchema, SchemaOptions};

// Records
pub use crate::types::{ConstructorArgs, ImmutableRecord, MutableRecord, Record, Value, ValueType, WrongType};

// Vector types
pub use crate::types::DistanceMetric;

// Codec bound to a schema
pub use crate::types::Codec;

// Timestamp type used by timestamp fields
pub use chrono::{DateTime, FixedOffset};
