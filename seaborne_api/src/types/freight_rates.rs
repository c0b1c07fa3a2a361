//! Records returned by the freight rates API.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

/// A port as reported by the freight rates API.
///
/// Pricing results omit ports now and then; such results carry
/// `Port::default()`, a port with every field `None`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Cargo cleanliness selector used by the pricing endpoint.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VesselSubclass {
    #[default]
    All,
    Dirty,
    Clean,
}

impl VesselSubclass {
    /// The fixed catalog of subclasses.
    pub const ALL: [VesselSubclass; 3] = [
        VesselSubclass::All,
        VesselSubclass::Dirty,
        VesselSubclass::Clean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VesselSubclass::All => "All",
            VesselSubclass::Dirty => "Dirty",
            VesselSubclass::Clean => "Clean",
        }
    }
}

impl fmt::Display for VesselSubclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VesselSubclass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VesselSubclass::ALL
            .into_iter()
            .find(|sc| sc.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Cost breakdown of a freight rates pricing result.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreightCosts {
    pub freight_rate: Option<Decimal>,
    pub freight_cost: Option<Decimal>,
    pub port_costs: Option<Decimal>,
    pub canal_costs: Option<Decimal>,
    pub additional_costs: Option<Decimal>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreightTotals {
    pub total_cost: Option<Decimal>,
    pub total_cost_per_ton: Option<Decimal>,
}

/// Freight rates pricing for one vessel class between a load and a discharge port.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreightRatesPricing {
    pub vessel_type: Option<String>,
    pub vessel_class: Option<String>,
    pub cargo_quantity: Option<Decimal>,
    pub load_port: Port,
    pub discharge_port: Port,
    pub costs: FreightCosts,
    pub totals: FreightTotals,
}
