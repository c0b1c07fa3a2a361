//! Pure parsers from decoded JSON documents to records.
//!
//! Every parser ignores keys it does not know and reads missing keys as
//! `None`. The first malformed value aborts the whole parse, so a record is
//! never returned half-built.

pub mod freight_pricing;
pub mod freight_rates;
pub mod geo;
pub mod market_rates;
pub mod valuations;

use serde_json::Value;

use crate::errors::ParseError;
use crate::json::{as_array, as_object, Object};

/// Applies an object parser to every element of a JSON array, keeping order.
pub(crate) fn parse_list<T>(
    value: &Value,
    context: &str,
    parse_one: impl Fn(&Object) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    as_array(value, context)?
        .iter()
        .map(|item| as_object(item, context).and_then(|obj| parse_one(obj)))
        .collect()
}

/// Parses a single-entity response body with an object parser.
pub fn parse_single<T>(
    value: &Value,
    context: &str,
    parse_one: impl Fn(&Object) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    parse_one(as_object(value, context)?)
}
