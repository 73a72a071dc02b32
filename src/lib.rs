//! # vecrecord
//!
//! Schema-driven record codec for JSON interchange and vector-store records.
//!
//! A [`RecordSchema`] declares, through explicit registration, which field is
//! the key, which fields carry data, and which field (if any) is a
//! fixed-dimension embedding. Records are converted to and from JSON text, and
//! split into a [`StorageRecord`] for a vector index.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vecrecord::prelude::*;
//!
//! let schema = RecordSchema::builder()
//!     .key("Key", ValueType::Int)
//!     .data("Name", ValueType::String)
//!     .vector("Vector", 384, DistanceMetric::Cosine)
//!     .build()?;
//!
//! let json = encode(&schema, &service)?;
//! let back: CloudService = decode(&schema, &json)?;
//! ```
//!
//! ## Record Kinds
//!
//! - [`MutableRecord`]: default-constructed, then assigned field by field
//! - [`ImmutableRecord`]: built once through a designated [`Constructor`],
//!   after every argument has been gathered
//!
//! ## Crates
//!
//! - `vecrecord-core` - values, schemas, record assembly, storage mapping
//! - `vecrecord-wire` - JSON encoding

#![warn(missing_docs)]

mod codec;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use codec::{
    decode, decode_with_constructor, encode, error_to_json, from_storage,
    from_storage_with_constructor, storage_definition, to_storage,
};
pub use error::{Error, Result};

// Re-export types
pub use types::*;
