//! Field coercion helpers for server JSON maps.
//!
//! Numbers and booleans may arrive either as native JSON values or as
//! strings ("4", "0.0", "1"). `null`, an absent key, and an empty string all
//! mean "no value" and map to `None`, never to a zero sentinel. A value
//! that is present but cannot be coerced is a hard `Parse` error.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use grocy_core::error::{GrocyError, GrocyResult};

/// Timestamp format used by the server, e.g. "2020-08-12 19:59:30".
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used by the server, e.g. "2020-08-10".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_err(key: &str, value: &Value, wanted: &str) -> GrocyError {
    GrocyError::Parse(format!("field `{key}`: cannot coerce {value} to {wanted}"))
}

fn missing_err(key: &str) -> GrocyError {
    GrocyError::Parse(format!("missing required field `{key}`"))
}

/// Coerce an optional integer field, accepting numbers and numeric strings.
pub fn int_field(map: &Value, key: &str) -> GrocyResult<Option<i64>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| parse_err(key, &map[key], "integer")),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|_| parse_err(key, &map[key], "integer"))
        }
        Some(other) => Err(parse_err(key, other, "integer")),
    }
}

/// Like [`int_field`], but the field must be present.
pub fn require_int(map: &Value, key: &str) -> GrocyResult<i64> {
    int_field(map, key)?.ok_or_else(|| missing_err(key))
}

/// Coerce an optional float field, accepting numbers and numeric strings.
pub fn float_field(map: &Value, key: &str) -> GrocyResult<Option<f64>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| parse_err(key, &map[key], "float")),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| parse_err(key, &map[key], "float"))
        }
        Some(other) => Err(parse_err(key, other, "float")),
    }
}

/// Like [`float_field`], but the field must be present.
pub fn require_float(map: &Value, key: &str) -> GrocyResult<f64> {
    float_field(map, key)?.ok_or_else(|| missing_err(key))
}

/// Coerce an optional boolean field, accepting booleans, 0/1 numbers, and
/// the string forms "0", "1", "true", "false".
pub fn bool_field(map: &Value, key: &str) -> GrocyResult<Option<bool>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Number(n)) => Ok(Some(n.as_i64().unwrap_or(0) != 0)),
        Some(Value::String(s)) => match s.trim() {
            "" => Ok(None),
            "0" | "false" => Ok(Some(false)),
            "1" | "true" => Ok(Some(true)),
            _ => Err(parse_err(key, &map[key], "boolean")),
        },
        Some(other) => Err(parse_err(key, other, "boolean")),
    }
}

/// An optional string field. `null` and absent map to `None`; empty strings
/// are preserved. Use [`non_empty_string_field`] when "" also means absent.
pub fn string_field(map: &Value, key: &str) -> GrocyResult<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(parse_err(key, other, "string")),
    }
}

/// An optional string field where the server uses "" for "no value".
pub fn non_empty_string_field(map: &Value, key: &str) -> GrocyResult<Option<String>> {
    Ok(string_field(map, key)?.filter(|s| !s.is_empty()))
}

/// Like [`string_field`], but the field must be present and non-empty.
pub fn require_string(map: &Value, key: &str) -> GrocyResult<String> {
    non_empty_string_field(map, key)?.ok_or_else(|| missing_err(key))
}

/// An optional timestamp field in the server's "%Y-%m-%d %H:%M:%S" format.
pub fn datetime_field(map: &Value, key: &str) -> GrocyResult<Option<NaiveDateTime>> {
    match non_empty_string_field(map, key)? {
        None => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
            .map(Some)
            .map_err(|_| parse_err(key, &map[key], "timestamp")),
    }
}

/// An optional date field. Accepts plain dates and full timestamps, which
/// are truncated to their date part.
pub fn date_field(map: &Value, key: &str) -> GrocyResult<Option<NaiveDate>> {
    match non_empty_string_field(map, key)? {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).map(|dt| dt.date()))
            .map(Some)
            .map_err(|_| parse_err(key, &map[key], "date")),
    }
}
