//! Parsers for the freight rates API.

use serde_json::Value;

use crate::errors::ParseError;
use crate::json::{field, opt_decimal, opt_i64, opt_object, opt_str, Object};
use crate::types::freight_rates::{FreightCosts, FreightRatesPricing, FreightTotals, Port};

use super::parse_list;

pub fn parse_port(obj: &Object) -> Result<Port, ParseError> {
    Ok(Port {
        id: opt_i64(obj, "id")?,
        name: opt_str(obj, "name")?,
    })
}

pub fn parse_ports(value: &Value) -> Result<Vec<Port>, ParseError> {
    parse_list(value, "ports", parse_port)
}

/// Reads a nested port, falling back to the all-`None` placeholder.
fn parse_nested_port(obj: &Object, key: &str) -> Result<Port, ParseError> {
    match opt_object(obj, key)? {
        Some(port) => parse_port(port),
        None => Ok(Port::default()),
    }
}

/// `costs` arrives either as an object or as a list holding one object.
fn costs_object<'a>(obj: &'a Object) -> Result<Option<&'a Object>, ParseError> {
    match field(obj, "costs") {
        Value::Null => Ok(None),
        Value::Object(costs) => Ok(Some(costs)),
        Value::Array(items) => match items.first() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(costs)) => Ok(Some(costs)),
            Some(_) => Err(ParseError::unexpected("costs", "an object")),
        },
        _ => Err(ParseError::unexpected("costs", "an object or a list")),
    }
}

fn parse_costs(obj: Option<&Object>) -> Result<FreightCosts, ParseError> {
    let Some(obj) = obj else {
        return Ok(FreightCosts::default());
    };
    Ok(FreightCosts {
        freight_rate: opt_decimal(obj, "freightRate")?,
        freight_cost: opt_decimal(obj, "freightCost")?,
        port_costs: opt_decimal(obj, "portCosts")?,
        canal_costs: opt_decimal(obj, "canalCosts")?,
        additional_costs: opt_decimal(obj, "additionalCosts")?,
    })
}

fn parse_totals(obj: Option<&Object>) -> Result<FreightTotals, ParseError> {
    let Some(obj) = obj else {
        return Ok(FreightTotals::default());
    };
    Ok(FreightTotals {
        total_cost: opt_decimal(obj, "totalCost")?,
        total_cost_per_ton: opt_decimal(obj, "totalCostPerTon")?,
    })
}

pub fn parse_freight_pricing_item(obj: &Object) -> Result<FreightRatesPricing, ParseError> {
    Ok(FreightRatesPricing {
        vessel_type: opt_str(obj, "vesselType")?,
        vessel_class: opt_str(obj, "vesselClass")?,
        cargo_quantity: opt_decimal(obj, "cargoQuantity")?,
        load_port: parse_nested_port(obj, "loadPort")?,
        discharge_port: parse_nested_port(obj, "dischargePort")?,
        costs: parse_costs(costs_object(obj)?)?,
        totals: parse_totals(opt_object(obj, "totals")?)?,
    })
}

pub fn parse_freight_pricing(value: &Value) -> Result<Vec<FreightRatesPricing>, ParseError> {
    parse_list(value, "freight rates pricing", parse_freight_pricing_item)
}
