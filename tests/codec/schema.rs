//! Schema Registration Tests
//!
//! Invalid declarations are rejected when the schema is built, before any
//! record is encoded.

use crate::*;
use vecrecord::{FieldRole, SchemaError};

#[test]
fn test_two_key_fields_rejected() {
    let err = RecordSchema::builder()
        .key("Id", ValueType::Int)
        .key("Slug", ValueType::String)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::MultipleKeyFields {
            first: "Id".into(),
            second: "Slug".into(),
        }
    );
}

#[test]
fn test_no_key_field_rejected() {
    let err = RecordSchema::builder()
        .data("Name", ValueType::String)
        .build()
        .unwrap_err();
    assert_eq!(err, SchemaError::NoKeyField);
}

#[test]
fn test_non_positive_dimension_rejected() {
    for dimension in [0, -1, -384] {
        let err = RecordSchema::builder()
            .key("Key", ValueType::Int)
            .vector("Vector", dimension, DistanceMetric::Cosine)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            SchemaError::InvalidVectorDimension {
                field: "Vector".into(),
                dimension,
            }
        );
    }
}

#[test]
fn test_second_constructor_rejected() {
    let err = RecordSchema::builder()
        .key("Date", ValueType::Timestamp)
        .data("Summary", ValueType::String)
        .constructor(Constructor::new(["date", "summary"]))
        .constructor(Constructor::new(["date"]))
        .build()
        .unwrap_err();
    assert_eq!(err, SchemaError::MultipleConstructors);
}

#[test]
fn test_constructor_parameter_without_field_rejected() {
    let err = RecordSchema::builder()
        .key("Date", ValueType::Timestamp)
        .constructor(Constructor::new(["date", "humidity"]))
        .build()
        .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidConstructor(_)));
}

#[test]
fn test_vector_type_outside_vector_role_rejected() {
    let err = RecordSchema::builder()
        .key("Key", ValueType::Int)
        .data("Embedding", ValueType::FloatVector)
        .build()
        .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidFieldType { .. }));
}

#[test]
fn test_interchange_name_collision_rejected() {
    let err = RecordSchema::builder()
        .key("Key", ValueType::Int)
        .field(FieldDescriptor::data("Name", ValueType::String).rename("Key"))
        .build()
        .unwrap_err();
    assert_eq!(err, SchemaError::DuplicateInterchangeName("Key".into()));
}

#[test]
fn test_roles_and_names_registered() {
    let schema = &*FORECAST;

    assert_eq!(schema.key_field().name(), "Date");
    assert!(schema.vector_field().is_none());
    assert_eq!(schema.field("TemperatureC").unwrap().role(), FieldRole::Data);
    assert_eq!(schema.interchange_name_at(0), "date");
    assert_eq!(schema.interchange_name_at(1), "celsius");
    assert_eq!(schema.interchange_name_at(2), "summary");

    let params: Vec<&str> = schema.constructor().unwrap().iter().map(|p| p.name()).collect();
    assert_eq!(params, ["date", "temperatureC", "summary"]);
}

#[test]
fn test_vector_config_exposed() {
    let config = CLOUD_SERVICE.vector_config().unwrap();
    assert_eq!(config.dimension, 384);
    assert_eq!(config.metric, DistanceMetric::Cosine);
}

#[test]
fn test_options_from_config_text() {
    let options: SchemaOptions =
        serde_json::from_str(r#"{"naming":"snake_case"}"#).unwrap();
    assert!(!options.case_insensitive);

    let schema = RecordSchema::builder()
        .key("ServiceId", ValueType::Int)
        .data("DisplayName", ValueType::String)
        .options(options)
        .build()
        .unwrap();
    assert_eq!(schema.interchange_name_at(0), "service_id");
    assert_eq!(schema.interchange_name_at(1), "display_name");
}
