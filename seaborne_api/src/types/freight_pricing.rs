//! Records returned by the freight pricing API.

use rust_decimal::Decimal;
use serde::Serialize;

/// A vessel type accepted by the pricing endpoint. The catalog is fixed, see
/// [`VESSEL_TYPES`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct VesselType {
    pub id: i32,
    pub name: &'static str,
}

/// Every vessel type the freight pricing API knows about.
pub const VESSEL_TYPES: [VesselType; 5] = [
    VesselType { id: 1, name: "Tanker" },
    VesselType { id: 3, name: "Dry" },
    VesselType { id: 4, name: "Container" },
    VesselType { id: 5, name: "LNG" },
    VesselType { id: 6, name: "LPG" },
];

impl VesselType {
    /// Looks a vessel type up by its numeric identifier.
    pub fn from_id(id: i32) -> Option<Self> {
        VESSEL_TYPES.iter().copied().find(|vt| vt.id == id)
    }
}

/// A port known to the freight pricing API.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Cost breakdown of a single pricing result.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    /// Freight rate in USD per metric ton.
    pub freight_rate: Option<Decimal>,
    /// Freight cost in USD for the whole cargo.
    pub freight_cost: Option<Decimal>,
    /// Canal transit cost in USD.
    pub canal: Option<Decimal>,
}

/// Totals of a single pricing result.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Total voyage cost in USD.
    pub total_cost: Option<Decimal>,
    /// Total voyage cost in USD per metric ton of cargo.
    pub total_cost_per_ton: Option<Decimal>,
}

/// Freight pricing for one vessel class on the requested voyage.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreightPricing {
    pub vessel_class: Option<String>,
    /// Cargo quantity in metric tons.
    pub cargo_quantity: Option<Decimal>,
    pub costs: Costs,
    pub totals: Totals,
}
