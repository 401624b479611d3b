//! Conversion from dataset DTOs to domain types.
//!
//! Each recognized field is checked for the JSON type it must have. Absent
//! fields keep their zero value; present fields of the wrong type fail the
//! whole decode.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::domain::{StationId, TimeOfDay, TrainRecord};

use super::error::DecodeError;
use super::types::{TrainDto, json_type_name};

/// Decode a JSON array of train objects into records, preserving order.
///
/// # Examples
///
/// ```
/// use train_finder::dataset::decode_records;
///
/// let json = br#"[{"trainId": 7, "price": 12.5, "departureTime": "08:15:00"}]"#;
/// let records = decode_records(json).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].id, 7);
/// assert_eq!(records[0].departure_time.to_string(), "08:15:00");
///
/// assert!(decode_records(b"{}").is_err());
/// ```
pub fn decode_records(bytes: &[u8]) -> Result<Vec<TrainRecord>, DecodeError> {
    // Parse as plain objects first so that only `[{...}, ...]` is accepted.
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(bytes)?;

    let mut records = Vec::with_capacity(objects.len());
    for (index, object) in objects.into_iter().enumerate() {
        let dto: TrainDto = serde_json::from_value(Value::Object(object))?;
        let record = convert_train(&dto, index)?;
        trace!(index, id = record.id, "decoded train record");
        records.push(record);
    }

    debug!(count = records.len(), "decoded dataset");
    Ok(records)
}

/// Convert a single DTO to a train record.
///
/// `index` is the record's position in the dataset, used in errors.
pub fn convert_train(dto: &TrainDto, index: usize) -> Result<TrainRecord, DecodeError> {
    let mut record = TrainRecord::default();

    if let Some(n) = number_field(dto.train_id.as_ref(), "trainId", index)? {
        record.id = n as i64;
    }
    if let Some(n) = number_field(
        dto.departure_station_id.as_ref(),
        "departureStationId",
        index,
    )? {
        record.departure_station_id = StationId::new(n as i64);
    }
    if let Some(n) = number_field(dto.arrival_station_id.as_ref(), "arrivalStationId", index)? {
        record.arrival_station_id = StationId::new(n as i64);
    }
    if let Some(n) = number_field(dto.price.as_ref(), "price", index)? {
        record.price = n as f32;
    }
    if let Some(t) = time_field(dto.arrival_time.as_ref(), "arrivalTime", index)? {
        record.arrival_time = t;
    }
    if let Some(t) = time_field(dto.departure_time.as_ref(), "departureTime", index)? {
        record.departure_time = t;
    }

    Ok(record)
}

/// Read a numeric field. Integers are truncated by the caller.
fn number_field(
    value: Option<&Value>,
    field: &'static str,
    record: usize,
) -> Result<Option<f64>, DecodeError> {
    let Some(value) = value else {
        return Ok(None);
    };

    value
        .as_f64()
        .map(Some)
        .ok_or_else(|| type_mismatch(value, field, "number", record))
}

/// Read a time field in "HH:MM:SS" form.
fn time_field(
    value: Option<&Value>,
    field: &'static str,
    record: usize,
) -> Result<Option<TimeOfDay>, DecodeError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let s = value
        .as_str()
        .ok_or_else(|| type_mismatch(value, field, "string", record))?;

    TimeOfDay::parse_hhmmss(s)
        .map(Some)
        .map_err(|source| DecodeError::TimeParse {
            record,
            field,
            value: s.to_string(),
            source,
        })
}

fn type_mismatch(
    value: &Value,
    field: &'static str,
    expected: &'static str,
    record: usize,
) -> DecodeError {
    DecodeError::TypeMismatch {
        record,
        field,
        expected,
        found: json_type_name(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Vec<TrainRecord>, DecodeError> {
        decode_records(json.as_bytes())
    }

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmmss(s).unwrap()
    }

    #[test]
    fn decode_full_record() {
        let records = decode(
            r#"[{
                "trainId": 1177,
                "departureStationId": 1902,
                "arrivalStationId": 1929,
                "price": 164.65,
                "arrivalTime": "10:25:00",
                "departureTime": "16:36:00"
            }]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, 1177);
        assert_eq!(r.departure_station_id, StationId::new(1902));
        assert_eq!(r.arrival_station_id, StationId::new(1929));
        assert!((r.price - 164.65).abs() < 1e-4);
        assert_eq!(r.arrival_time, time("10:25:00"));
        assert_eq!(r.departure_time, time("16:36:00"));
    }

    #[test]
    fn preserves_source_order_and_duplicates() {
        let records = decode(
            r#"[{"trainId": 3}, {"trainId": 1}, {"trainId": 3}, {"trainId": 2}]"#,
        )
        .unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 3, 2]);
    }

    #[test]
    fn empty_array_is_empty_dataset() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let records = decode(r#"[{}]"#).unwrap();
        assert_eq!(records[0], TrainRecord::default());

        let records = decode(r#"[{"price": 10}]"#).unwrap();
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].price, 10.0);
        assert_eq!(records[0].arrival_time, TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn numbers_are_truncated_to_integers() {
        let records =
            decode(r#"[{"trainId": 2.9, "departureStationId": -1.5, "arrivalStationId": 1e2}]"#)
                .unwrap();
        assert_eq!(records[0].id, 2);
        assert_eq!(records[0].departure_station_id, StationId::new(-1));
        assert_eq!(records[0].arrival_station_id, StationId::new(100));
    }

    #[test]
    fn unknown_fields_ignored() {
        let records = decode(r#"[{"trainId": 5, "carrier": "UZ", "legs": []}]"#).unwrap();
        assert_eq!(records[0].id, 5);
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let records = decode(r#"[{"trainId": 1, "trainId": 2}]"#).unwrap();
        assert_eq!(records[0].id, 2);
    }

    #[test]
    fn string_id_is_type_mismatch() {
        let err = decode(r#"[{"trainId": 1}, {"trainId": "2"}]"#).unwrap_err();
        match err {
            DecodeError::TypeMismatch {
                record,
                field,
                expected,
                found,
            } => {
                assert_eq!(record, 1);
                assert_eq!(field, "trainId");
                assert_eq!(expected, "number");
                assert_eq!(found, "string");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn each_numeric_field_is_type_checked() {
        for field in ["trainId", "departureStationId", "arrivalStationId", "price"] {
            let json = format!(r#"[{{"{field}": true}}]"#);
            match decode(&json).unwrap_err() {
                DecodeError::TypeMismatch { field: f, .. } => assert_eq!(f, field),
                other => panic!("{field}: expected TypeMismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn null_field_is_type_mismatch() {
        let err = decode(r#"[{"price": null}]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                field: "price",
                found: "null",
                ..
            }
        ));
    }

    #[test]
    fn numeric_time_is_type_mismatch() {
        let err = decode(r#"[{"arrivalTime": 1000}]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                field: "arrivalTime",
                expected: "string",
                found: "number",
                ..
            }
        ));
    }

    #[test]
    fn bad_time_string_is_time_parse_error() {
        let err = decode(r#"[{"departureTime": "25:00:00"}]"#).unwrap_err();
        match err {
            DecodeError::TimeParse {
                record,
                field,
                value,
                ..
            } => {
                assert_eq!(record, 0);
                assert_eq!(field, "departureTime");
                assert_eq!(value, "25:00:00");
            }
            other => panic!("expected TimeParse, got {other:?}"),
        }

        let err = decode(r#"[{"arrivalTime": "10:00:30"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::TimeParse { .. }));
    }

    #[test]
    fn malformed_outer_structure() {
        for json in ["", "{", "{}", "42", r#""trains""#, "[1, 2]", "[[1, 2, 3]]", "[null]"] {
            let err = decode(json).unwrap_err();
            assert!(
                matches!(err, DecodeError::MalformedInput(_)),
                "{json:?} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn convert_train_directly() {
        let dto = TrainDto {
            train_id: Some(Value::from(9)),
            price: Some(Value::from(1.25)),
            ..TrainDto::default()
        };
        let record = convert_train(&dto, 0).unwrap();
        assert_eq!(record.id, 9);
        assert_eq!(record.price, 1.25);
    }
}
