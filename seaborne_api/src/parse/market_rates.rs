//! Parsers for the market rates API. This service spells its keys in
//! snake_case.

use serde_json::Value;

use crate::errors::ParseError;
use crate::json::{opt_f64, opt_i64, opt_str, opt_timestamp, Object};
use crate::types::market_rates::{MarketRate, Route, VesselClass};

use super::parse_list;

/// Route and vessel class of an assessment the upstream service publishes but
/// clients must never see.
const EXCLUDED_ROUTE_ID: &str = "TC1";
const EXCLUDED_VESSEL_CLASS_ID: i64 = 86;

fn is_excluded(rate: &MarketRate) -> bool {
    rate.route_id.as_deref() == Some(EXCLUDED_ROUTE_ID)
        && rate.vessel_class_id == Some(EXCLUDED_VESSEL_CLASS_ID)
}

pub fn parse_market_rate(obj: &Object) -> Result<MarketRate, ParseError> {
    Ok(MarketRate {
        route_id: opt_str(obj, "route_id")?,
        rate_date: opt_timestamp(obj, "rate_date")?,
        rate: opt_f64(obj, "rate")?,
        unit: opt_str(obj, "unit")?,
        vessel_class_id: opt_i64(obj, "vessel_class_id")?,
    })
}

/// Parses a list of market rates, dropping the `TC1` / class 86 assessments.
pub fn parse_market_rates(value: &Value) -> Result<Vec<MarketRate>, ParseError> {
    let rates = parse_list(value, "market rates", parse_market_rate)?;
    Ok(rates.into_iter().filter(|rate| !is_excluded(rate)).collect())
}

pub fn parse_route(obj: &Object) -> Result<Route, ParseError> {
    Ok(Route {
        id: opt_str(obj, "id")?,
        description: opt_str(obj, "description")?,
        unit: opt_str(obj, "unit")?,
        vessel_class_id: opt_i64(obj, "vessel_class_id")?,
        deprecated_to: opt_str(obj, "deprecated_to")?,
        deprecated_since: opt_timestamp(obj, "deprecated_since")?,
    })
}

pub fn parse_routes(value: &Value) -> Result<Vec<Route>, ParseError> {
    parse_list(value, "routes", parse_route)
}

pub fn parse_vessel_class(obj: &Object) -> Result<VesselClass, ParseError> {
    Ok(VesselClass {
        id: opt_i64(obj, "id")?,
        name: opt_str(obj, "name")?,
        vessel_type_id: opt_i64(obj, "vessel_type_id")?,
        from_size: opt_i64(obj, "from_size")?,
        to_size: opt_i64(obj, "to_size")?,
        vessel_type: opt_str(obj, "vessel_type")?,
    })
}

pub fn parse_vessel_classes(value: &Value) -> Result<Vec<VesselClass>, ParseError> {
    parse_list(value, "vessel classes", parse_vessel_class)
}
