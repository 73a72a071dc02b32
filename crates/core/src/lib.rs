//! Core types for vecrecord
//!
//! This crate holds the format-independent half of the codec:
//!
//! - [`Value`] / [`ValueType`]: the in-memory form of a field
//! - [`RecordSchema`]: explicit field registration with key, data and vector roles
//! - [`Record`], [`MutableRecord`], [`ImmutableRecord`]: how records expose and
//!   receive their fields
//! - [`FieldValues`]: gather-then-construct assembly used by every decoder
//! - [`StorageRecord`]: the fixed-schema representation for vector stores
//! - The error taxonomy shared by all crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod naming;
pub mod record;
pub mod schema;
pub mod storage;
pub mod value;
pub mod vector;

pub use error::{CodecError, DecodeError, EncodeError, SchemaError};
pub use naming::NamingPolicy;
pub use record::{extract, ConstructorArgs, FieldValues, ImmutableRecord, MutableRecord, Record};
pub use schema::{
    Constructor, FieldDescriptor, FieldRole, Parameter, RecordSchema, RecordSchemaBuilder,
    SchemaOptions,
};
pub use storage::{from_storage, from_storage_with_constructor, to_storage, StorageRecord};
pub use value::{Value, ValueType, WrongType};
pub use vector::{DistanceMetric, VectorConfig};
