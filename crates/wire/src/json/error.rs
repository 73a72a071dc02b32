//! Wire error encoding
//!
//! Errors cross the wire as:
//! ```json
//! {
//!   "code": "DimensionMismatch",
//!   "details": {"field": "Vector", "expected": 384, "actual": 10},
//!   "message": "dimension mismatch for field Vector: expected 384, got 10"
//! }
//! ```

use serde_json::{json, Value as Json};
use vecrecord_core::{CodecError, DecodeError, EncodeError, SchemaError};

/// Encode a codec error to JSON
pub fn encode_error(error: &CodecError) -> String {
    json!({
        "code": error.error_code(),
        "message": error.to_string(),
        "details": details(error),
    })
    .to_string()
}

fn details(error: &CodecError) -> Json {
    match error {
        CodecError::Schema(e) => match e {
            SchemaError::MultipleKeyFields { first, second }
            | SchemaError::MultipleVectorFields { first, second } => {
                json!({ "first": first, "second": second })
            }
            SchemaError::InvalidVectorDimension { field, dimension } => {
                json!({ "field": field, "dimension": dimension })
            }
            SchemaError::DuplicateField(field) | SchemaError::DuplicateInterchangeName(field) => {
                json!({ "field": field })
            }
            SchemaError::InvalidKeyType { field, value_type }
            | SchemaError::InvalidFieldType { field, value_type } => {
                json!({ "field": field, "type": value_type })
            }
            SchemaError::InvalidConstructor(reason) => json!({ "reason": reason }),
            SchemaError::NoKeyField | SchemaError::MultipleConstructors => Json::Null,
        },
        CodecError::Encode(e) => match e {
            EncodeError::DimensionMismatch {
                field,
                expected,
                actual,
            } => json!({ "field": field, "expected": expected, "actual": actual }),
            EncodeError::MissingField(field) | EncodeError::NonFiniteValue(field) => {
                json!({ "field": field })
            }
            EncodeError::WrongType {
                field,
                expected,
                actual,
            } => json!({ "field": field, "expected": expected, "actual": actual }),
            EncodeError::OffsetNotRepresentable {
                field,
                offset_seconds,
            } => json!({ "field": field, "offset_seconds": offset_seconds }),
            EncodeError::Serialization(_) => Json::Null,
        },
        CodecError::Decode(e) => match e {
            DecodeError::MissingRequiredField(field) => json!({ "field": field }),
            DecodeError::MissingConstructorArgument(parameter) => {
                json!({ "parameter": parameter })
            }
            DecodeError::WrongType {
                field,
                expected,
                actual,
            } => json!({ "field": field, "expected": expected, "actual": actual }),
            DecodeError::DimensionMismatch {
                field,
                expected,
                actual,
            } => json!({ "field": field, "expected": expected, "actual": actual }),
            DecodeError::MalformedPayload(_) | DecodeError::NoDesignatedConstructor => Json::Null,
        },
    }
}
