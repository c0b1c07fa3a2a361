//! Coercion of raw JSON scalars into precision-preserving domain values.
//!
//! Prices and quantities become [`Decimal`]s built from the exact text the
//! server sent. Dates become UTC instants. `null` always maps to `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::errors::ParseError;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Converts a JSON number or numeric string into a [`Decimal`].
///
/// Numbers are read from their canonical text form, strings are parsed as
/// written, so `"1.500"` keeps its scale of 3. Text with more digits than a
/// `Decimal` holds is an error rather than a rounded value.
pub fn to_decimal(raw: &Value) -> Result<Option<Decimal>, ParseError> {
    match raw {
        Value::Null => Ok(None),
        Value::Number(n) => parse_decimal(&n.to_string()).map(Some),
        Value::String(s) => parse_decimal(s.trim()).map(Some),
        other => Err(ParseError::InvalidDecimal(other.to_string())),
    }
}

/// Converts an ISO-8601 date or date-time string into a UTC instant.
///
/// Input without an offset is taken to be UTC already. A bare date is
/// midnight UTC of that day.
pub fn to_utc_timestamp(raw: &Value) -> Result<Option<DateTime<Utc>>, ParseError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) => parse_timestamp(s.trim())
            .map(Some)
            .ok_or_else(|| ParseError::InvalidTimestamp(s.clone())),
        other => Err(ParseError::InvalidTimestamp(other.to_string())),
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, ParseError> {
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    };
    parsed.map_err(|_| ParseError::InvalidDecimal(text.to_string()))
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}
