//! Vector-Store Mapping Tests

use crate::*;
use vecrecord::{DecodeError, Error, StorageRecord};

#[test]
fn test_storage_split() {
    let record = service(9, "Bucket", 0.5);

    let stored = vecrecord::to_storage(&*CLOUD_SERVICE, &record).unwrap();

    assert_eq!(stored.key, Value::Int(9));
    assert_eq!(
        stored.data,
        vec![
            ("Name".to_string(), Value::from("Bucket")),
            ("Description".to_string(), Value::from("A bucket")),
        ]
    );
    assert_eq!(stored.vector.as_deref(), Some(&[0.5f32; 384][..]));
}

#[test]
fn test_storage_round_trip() {
    let record = service(9, "Bucket", -0.125);

    let stored = vecrecord::to_storage(&*CLOUD_SERVICE, &record).unwrap();
    let back: CloudService = vecrecord::from_storage(&CLOUD_SERVICE, stored).unwrap();

    assert_eq!(back, record);
}

#[test]
fn test_storage_round_trip_through_constructor() {
    let json = r#"{"date":"2021-03-01T08:00:00+01:00","celsius":12,"summary":"Fresh"}"#;
    let forecast: Forecast = vecrecord::decode_with_constructor(&FORECAST, json).unwrap();

    let stored = vecrecord::to_storage(&*FORECAST, &forecast).unwrap();
    assert!(stored.vector.is_none());

    let back: Forecast = vecrecord::from_storage_with_constructor(&FORECAST, stored).unwrap();
    assert_eq!(back, forecast);
}

#[test]
fn test_storage_wrong_dimension_rejected() {
    let stored = StorageRecord {
        key: Value::Int(1),
        data: vec![],
        vector: Some(vec![0.0; 10]),
    };

    let err = vecrecord::from_storage::<CloudService>(&CLOUD_SERVICE, stored).unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::DimensionMismatch {
            field: "Vector".into(),
            expected: 384,
            actual: 10,
        })
    );
}

#[test]
fn test_storage_definition() {
    let definition = vecrecord::storage_definition(&CLOUD_SERVICE);
    let parsed: serde_json::Value = serde_json::from_str(&definition).unwrap();

    let fields = parsed["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0]["role"], "key");
    assert_eq!(fields[3]["name"], "Vector");
    assert_eq!(fields[3]["dimension"], 384);
    assert_eq!(fields[3]["metric"], "cosine");
}
