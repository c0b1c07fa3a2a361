//! Parsers for the vessel valuations API.

use serde_json::Value;

use crate::errors::ParseError;
use crate::json::{opt_decimal, opt_i64, opt_timestamp, Object};
use crate::types::valuations::Valuation;

use super::{parse_list, parse_single};

pub fn parse_valuation_object(obj: &Object) -> Result<Valuation, ParseError> {
    Ok(Valuation {
        imo: opt_i64(obj, "imo")?,
        valuation_price: opt_decimal(obj, "valuationPrice")?,
        valuation_date: opt_timestamp(obj, "valuationDate")?,
        updated_date: opt_timestamp(obj, "updatedDate")?,
    })
}

pub fn parse_valuation(value: &Value) -> Result<Valuation, ParseError> {
    parse_single(value, "valuation", parse_valuation_object)
}

pub fn parse_valuations(value: &Value) -> Result<Vec<Valuation>, ParseError> {
    parse_list(value, "valuations", parse_valuation_object)
}
