//! Typed "extract or None" accessors over decoded JSON objects.
//!
//! Missing keys and explicit `null`s both read as `None`. A key holding a
//! value of the wrong JSON kind is a [`ParseError`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::coerce::{to_decimal, to_utc_timestamp};
use crate::errors::ParseError;

pub(crate) type Object = Map<String, Value>;

static NULL: Value = Value::Null;

/// Returns the raw value under `key`, or `null` when the key is absent.
pub(crate) fn field<'a>(obj: &'a Object, key: &str) -> &'a Value {
    obj.get(key).unwrap_or(&NULL)
}

pub(crate) fn as_object<'a>(value: &'a Value, context: &str) -> Result<&'a Object, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::unexpected(context, "an object"))
}

pub(crate) fn as_array<'a>(value: &'a Value, context: &str) -> Result<&'a [Value], ParseError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ParseError::unexpected(context, "an array"))
}

pub(crate) fn opt_str(obj: &Object, key: &str) -> Result<Option<String>, ParseError> {
    match field(obj, key) {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ParseError::unexpected(key, "a string")),
    }
}

pub(crate) fn opt_i64(obj: &Object, key: &str) -> Result<Option<i64>, ParseError> {
    match field(obj, key) {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ParseError::unexpected(key, "an integer")),
        _ => Err(ParseError::unexpected(key, "an integer")),
    }
}

pub(crate) fn opt_f64(obj: &Object, key: &str) -> Result<Option<f64>, ParseError> {
    match field(obj, key) {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        _ => Err(ParseError::unexpected(key, "a number")),
    }
}

pub(crate) fn opt_decimal(obj: &Object, key: &str) -> Result<Option<Decimal>, ParseError> {
    to_decimal(field(obj, key))
}

pub(crate) fn opt_timestamp(obj: &Object, key: &str) -> Result<Option<DateTime<Utc>>, ParseError> {
    to_utc_timestamp(field(obj, key))
}

pub(crate) fn opt_object<'a>(obj: &'a Object, key: &str) -> Result<Option<&'a Object>, ParseError> {
    match field(obj, key) {
        Value::Null => Ok(None),
        Value::Object(inner) => Ok(Some(inner)),
        _ => Err(ParseError::unexpected(key, "an object")),
    }
}

/// Reads a code that some services send as text and others as an integer,
/// e.g. `"784"` or `784`. Either way the result is the text form.
pub(crate) fn opt_code(obj: &Object, key: &str) -> Result<Option<String>, ParseError> {
    match field(obj, key) {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        _ => Err(ParseError::unexpected(key, "a string or an integer")),
    }
}
