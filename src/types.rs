//! Public types for the vecrecord API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Values
pub use vecrecord_core::{Value, ValueType, WrongType};

// Schema registration
pub use vecrecord_core::{
    Constructor, FieldDescriptor, FieldRole, NamingPolicy, Parameter, RecordSchema,
    RecordSchemaBuilder, SchemaOptions,
};

// Record access
pub use vecrecord_core::{ConstructorArgs, ImmutableRecord, MutableRecord, Record};

// Vector types
pub use vecrecord_core::{DistanceMetric, VectorConfig};

// Storage representation
pub use vecrecord_core::StorageRecord;

// Error categories
pub use vecrecord_core::{DecodeError, EncodeError, SchemaError};

// Wire types
pub use vecrecord_wire::{Codec, Payload};
