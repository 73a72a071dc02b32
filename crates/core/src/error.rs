//! Error taxonomy for schema construction, encoding and decoding
//!
//! All errors are deterministic data-shape errors. They are raised to the
//! caller at the point of detection and never retried internally.

use thiserror::Error;

/// Errors raised while building a [`RecordSchema`](crate::RecordSchema)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// No field was declared with the Key role
    #[error("schema declares no key field")]
    NoKeyField,

    /// More than one field was declared with the Key role
    #[error("schema declares multiple key fields: {first} and {second}")]
    MultipleKeyFields {
        /// First key field encountered
        first: String,
        /// Second key field encountered
        second: String,
    },

    /// More than one field was declared with the Vector role
    #[error("schema declares multiple vector fields: {first} and {second}")]
    MultipleVectorFields {
        /// First vector field encountered
        first: String,
        /// Second vector field encountered
        second: String,
    },

    /// Vector field declared without a positive dimension
    #[error("invalid dimension for vector field {field}: {dimension} (must be > 0)")]
    InvalidVectorDimension {
        /// Vector field name
        field: String,
        /// Declared dimension
        dimension: i64,
    },

    /// Two fields share a declared name
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// Two fields resolve to the same interchange name
    #[error("duplicate interchange name: {0}")]
    DuplicateInterchangeName(String),

    /// Key field has a type that cannot identify a record
    #[error("key field {field} has unsupported type {value_type} (expected int, string or timestamp)")]
    InvalidKeyType {
        /// Key field name
        field: String,
        /// Declared type
        value_type: &'static str,
    },

    /// Field type does not agree with its role
    #[error("field {field} has type {value_type}, which is not allowed for its role")]
    InvalidFieldType {
        /// Field name
        field: String,
        /// Declared type
        value_type: &'static str,
    },

    /// More than one constructor was designated
    #[error("schema designates more than one constructor")]
    MultipleConstructors,

    /// Designated constructor does not map onto the declared fields
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// Errors raised while encoding a record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Vector length differs from the declared dimension
    #[error("dimension mismatch for field {field}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Vector field name
        field: String,
        /// Declared dimension
        expected: usize,
        /// Runtime length
        actual: usize,
    },

    /// Record returned no value for a required field
    #[error("record has no value for field {0}")]
    MissingField(String),

    /// Record value does not match the declared type
    #[error("wrong type for field {field}: expected {expected}, got {actual}")]
    WrongType {
        /// Field name
        field: String,
        /// Declared type
        expected: &'static str,
        /// Runtime type
        actual: &'static str,
    },

    /// Timestamp offset has a seconds component, which RFC 3339 cannot carry
    #[error("timestamp offset of field {field} is not a whole number of minutes: {offset_seconds}s")]
    OffsetNotRepresentable {
        /// Timestamp field name
        field: String,
        /// Offset from UTC in seconds
        offset_seconds: i32,
    },

    /// NaN or infinity, which the interchange format cannot carry
    #[error("non-finite value in field {0}")]
    NonFiniteValue(String),

    /// Output could not be rendered
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors raised while decoding a payload into a record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload lacks the key field
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// Payload lacks a value for a constructor parameter
    #[error("missing constructor argument: {0}")]
    MissingConstructorArgument(String),

    /// Payload is not valid or has the wrong shape
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Value does not match the type the record expects
    #[error("wrong type for field {field}: expected {expected}, got {actual}")]
    WrongType {
        /// Field name
        field: String,
        /// Expected type
        expected: &'static str,
        /// Actual type
        actual: &'static str,
    },

    /// Vector length in the payload differs from the declared dimension
    #[error("dimension mismatch for field {field}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Vector field name
        field: String,
        /// Declared dimension
        expected: usize,
        /// Payload length
        actual: usize,
    },

    /// Constructor-based decoding requested for a schema without one
    #[error("schema has no designated constructor")]
    NoDesignatedConstructor,
}

/// Any codec error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Schema construction failed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Encoding failed
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Decoding failed
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl CodecError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            CodecError::Schema(e) => match e {
                SchemaError::NoKeyField => "NoKeyField",
                SchemaError::MultipleKeyFields { .. } => "MultipleKeyFields",
                SchemaError::MultipleVectorFields { .. } => "MultipleVectorFields",
                SchemaError::InvalidVectorDimension { .. } => "InvalidVectorDimension",
                SchemaError::DuplicateField(_) => "DuplicateField",
                SchemaError::DuplicateInterchangeName(_) => "DuplicateInterchangeName",
                SchemaError::InvalidKeyType { .. } => "InvalidKeyType",
                SchemaError::InvalidFieldType { .. } => "InvalidFieldType",
                SchemaError::MultipleConstructors => "MultipleConstructors",
                SchemaError::InvalidConstructor(_) => "InvalidConstructor",
            },
            CodecError::Encode(e) => match e {
                EncodeError::DimensionMismatch { .. } => "DimensionMismatch",
                EncodeError::MissingField(_) => "MissingField",
                EncodeError::WrongType { .. } => "WrongType",
                EncodeError::OffsetNotRepresentable { .. } => "OffsetNotRepresentable",
                EncodeError::NonFiniteValue(_) => "NonFiniteValue",
                EncodeError::Serialization(_) => "Serialization",
            },
            CodecError::Decode(e) => match e {
                DecodeError::MissingRequiredField(_) => "MissingRequiredField",
                DecodeError::MissingConstructorArgument(_) => "MissingConstructorArgument",
                DecodeError::MalformedPayload(_) => "MalformedPayload",
                DecodeError::WrongType { .. } => "WrongType",
                DecodeError::DimensionMismatch { .. } => "DimensionMismatch",
                DecodeError::NoDesignatedConstructor => "NoDesignatedConstructor",
            },
        }
    }

    /// Schema errors are configuration bugs, the rest reject a single record
    pub fn is_schema_error(&self) -> bool {
        matches!(self, CodecError::Schema(_))
    }
}
