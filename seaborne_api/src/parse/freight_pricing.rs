//! Parsers for the freight pricing API.

use serde_json::Value;

use crate::errors::ParseError;
use crate::json::{opt_decimal, opt_i64, opt_object, opt_str, Object};
use crate::types::freight_pricing::{Costs, FreightPricing, Port, Totals};

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

fn parse_costs(obj: Option<&Object>) -> Result<Costs, ParseError> {
    let Some(obj) = obj else {
        return Ok(Costs::default());
    };
    Ok(Costs {
        freight_rate: opt_decimal(obj, "freightRate")?,
        freight_cost: opt_decimal(obj, "freightCost")?,
        canal: opt_decimal(obj, "canal")?,
    })
}

fn parse_totals(obj: Option<&Object>) -> Result<Totals, ParseError> {
    let Some(obj) = obj else {
        return Ok(Totals::default());
    };
    Ok(Totals {
        total_cost: opt_decimal(obj, "totalCost")?,
        total_cost_per_ton: opt_decimal(obj, "totalCostPerTon")?,
    })
}

pub fn parse_freight_pricing_item(obj: &Object) -> Result<FreightPricing, ParseError> {
    Ok(FreightPricing {
        vessel_class: opt_str(obj, "vesselClass")?,
        cargo_quantity: opt_decimal(obj, "cargoQuantity")?,
        costs: parse_costs(opt_object(obj, "costs")?)?,
        totals: parse_totals(opt_object(obj, "totals")?)?,
    })
}

/// Parses the body of the pricing endpoint: a list of per-vessel-class results.
pub fn parse_freight_pricing(value: &Value) -> Result<Vec<FreightPricing>, ParseError> {
    parse_list(value, "freight pricing", parse_freight_pricing_item)
}
