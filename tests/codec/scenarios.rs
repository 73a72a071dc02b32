//! Scenario Tests
//!
//! Realistic records pushed through the facade end to end.

use crate::*;
use vecrecord::{DecodeError, EncodeError, Error};

const FORECAST_JSON: &str =
    r#"{"date":"2020-09-06T11:31:01.923395-07:00","celsius":-1,"summary":"Cold"}"#;

// =============================================================================
// CloudService (mutable, vector field)
// =============================================================================

#[test]
fn test_cloud_service_round_trip() {
    let record = service(1, "Widget", 0.0);

    let json = vecrecord::encode(&*CLOUD_SERVICE, &record).unwrap();
    let back: CloudService = vecrecord::decode(&*CLOUD_SERVICE, &json).unwrap();

    assert_eq!(back, record);
    assert_eq!(back.description, "A widget");
    assert_eq!(back.vector.len(), 384);
}

#[test]
fn test_cloud_service_widget_payload() {
    let json = vecrecord::encode(&*CLOUD_SERVICE, &service(1, "Widget", 0.0)).unwrap();

    let zeros = vec!["0.0"; 384].join(",");
    assert_eq!(
        json,
        format!(r#"{{"Key":1,"Name":"Widget","Description":"A widget","Vector":[{zeros}]}}"#)
    );

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = parsed.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(object["Vector"].as_array().unwrap().len(), 384);
}

#[test]
fn test_cloud_service_field_order() {
    let json = vecrecord::encode(&*CLOUD_SERVICE, &service(7, "Queue", 0.25)).unwrap();

    let key = json.find(r#""Key""#).unwrap();
    let name = json.find(r#""Name""#).unwrap();
    let description = json.find(r#""Description""#).unwrap();
    let vector = json.find(r#""Vector""#).unwrap();
    assert!(key < name && name < description && description < vector);
    assert!(json.starts_with(r#"{"Key":7,"Name":"Queue","Description":"A queue","Vector":[0.25,"#));
}

#[test]
fn test_cloud_service_missing_key() {
    let json = r#"{"Name":"Widget","Description":"A widget"}"#;

    let err = vecrecord::decode::<CloudService>(&CLOUD_SERVICE, json).unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::MissingRequiredField("Key".into()))
    );
}

#[test]
fn test_cloud_service_short_vector_rejected_on_encode() {
    let mut record = service(1, "Widget", 0.0);
    record.vector = vec![0.0; 10];

    let err = vecrecord::encode(&*CLOUD_SERVICE, &record).unwrap_err();
    assert_eq!(
        err,
        Error::Encode(EncodeError::DimensionMismatch {
            field: "Vector".into(),
            expected: 384,
            actual: 10,
        })
    );
}

#[test]
fn test_cloud_service_short_vector_rejected_on_decode() {
    let json = r#"{"Key":1,"Name":"Widget","Description":"A widget","Vector":[0.0,1.0]}"#;

    let err = vecrecord::decode::<CloudService>(&CLOUD_SERVICE, json).unwrap_err();
    assert_eq!(err.error_code(), "DimensionMismatch");
}

#[test]
fn test_cloud_service_unknown_fields_ignored() {
    let json = r#"{"Key":3,"Name":"Cache","Region":"eu-west-1","Tags":["a","b"]}"#;

    let back: CloudService = vecrecord::decode(&CLOUD_SERVICE, json).unwrap();
    assert_eq!(back.key, 3);
    assert_eq!(back.name, "Cache");
    assert!(back.description.is_empty());
    assert!(back.vector.is_empty());
}

#[test]
fn test_cloud_service_non_numeric_vector_entry() {
    let json = r#"{"Key":1,"Vector":[0.0,"x"]}"#;

    let err = vecrecord::decode::<CloudService>(&CLOUD_SERVICE, json).unwrap_err();
    assert!(matches!(err, Error::Decode(DecodeError::MalformedPayload(_))));
}

// =============================================================================
// Forecast (immutable, designated constructor)
// =============================================================================

#[test]
fn test_forecast_byte_for_byte() {
    let forecast: Forecast = vecrecord::decode_with_constructor(&FORECAST, FORECAST_JSON).unwrap();

    assert_eq!(forecast.temperature_c(), -1);
    assert_eq!(forecast.summary(), "Cold");
    assert_eq!(forecast.date().offset().local_minus_utc(), -7 * 3600);
    assert_eq!(forecast.date().timestamp_subsec_micros(), 923_395);

    let json = vecrecord::encode(&*FORECAST, &forecast).unwrap();
    assert_eq!(json, FORECAST_JSON);
}

#[test]
fn test_forecast_case_insensitive_names() {
    let json = r#"{"DATE":"2020-09-06T11:31:01.923395-07:00","Celsius":5,"Summary":"Mild"}"#;

    let forecast: Forecast = vecrecord::decode_with_constructor(&FORECAST, json).unwrap();
    assert_eq!(forecast.temperature_c(), 5);
    assert_eq!(forecast.summary(), "Mild");
}

#[test]
fn test_forecast_numbers_from_strings() {
    let json = r#"{"date":"2020-09-06T11:31:01.923395-07:00","celsius":"-1","summary":"Cold"}"#;

    let forecast: Forecast = vecrecord::decode_with_constructor(&FORECAST, json).unwrap();
    assert_eq!(forecast.temperature_c(), -1);
    assert_eq!(vecrecord::encode(&*FORECAST, &forecast).unwrap(), FORECAST_JSON);
}

#[test]
fn test_forecast_offset_with_seconds_rejected() {
    let offset = FixedOffset::east_opt(3661).unwrap();
    let date = DateTime::parse_from_rfc3339("2020-09-06T11:31:01.923395+00:00")
        .unwrap()
        .with_timezone(&offset);
    let forecast = Forecast::new(date, -1, "Cold".to_string());

    let err = vecrecord::encode(&*FORECAST, &forecast).unwrap_err();
    assert_eq!(
        err,
        Error::Encode(EncodeError::OffsetNotRepresentable {
            field: "Date".into(),
            offset_seconds: 3661,
        })
    );
}

#[test]
fn test_forecast_missing_constructor_argument() {
    let json = r#"{"date":"2020-09-06T11:31:01.923395-07:00","celsius":-1}"#;

    let err = vecrecord::decode_with_constructor::<Forecast>(&FORECAST, json).unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::MissingConstructorArgument("summary".into()))
    );
}

#[test]
fn test_forecast_malformed_timestamp() {
    let json = r#"{"date":"9/6/2020 11:31:01 AM","celsius":-1,"summary":"Cold"}"#;

    let err = vecrecord::decode_with_constructor::<Forecast>(&FORECAST, json).unwrap_err();
    assert!(matches!(err, Error::Decode(DecodeError::MalformedPayload(_))));
}

#[test]
fn test_codec_shares_schema() {
    let codec = Codec::new((*FORECAST).clone());

    let forecast: Forecast = codec.decode_with_constructor(FORECAST_JSON).unwrap();
    assert_eq!(codec.encode(&forecast).unwrap(), FORECAST_JSON);
}

// =============================================================================
// Error wire form
// =============================================================================

#[test]
fn test_error_to_json() {
    let err = vecrecord::decode::<CloudService>(&CLOUD_SERVICE, "{}").unwrap_err();

    let body: serde_json::Value = serde_json::from_str(&vecrecord::error_to_json(&err)).unwrap();
    assert_eq!(body["code"], "MissingRequiredField");
    assert_eq!(body["details"]["field"], "Key");
    assert_eq!(body["message"], "missing required field: Key");
}
