//! Market rate, route and vessel class records.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A market rate route, e.g. `TD3C` (Middle East Gulf to China, VLCC).
///
/// Retired routes point at their successor through `deprecated_to`. The link
/// is informational only: successors may themselves be deprecated and the
/// chain is not guaranteed to terminate.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: Option<String>,
    pub description: Option<String>,
    /// Unit the route is quoted in, e.g. `"WS"` or `"$/day"`.
    pub unit: Option<String>,
    pub vessel_class_id: Option<i64>,
    pub deprecated_to: Option<String>,
    pub deprecated_since: Option<DateTime<Utc>>,
}

impl Route {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated_to.is_some() || self.deprecated_since.is_some()
    }
}

/// A single rate assessment for a route on a given day.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketRate {
    pub route_id: Option<String>,
    pub rate_date: Option<DateTime<Utc>>,
    pub rate: Option<f64>,
    pub unit: Option<String>,
    pub vessel_class_id: Option<i64>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VesselClass {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub vessel_type_id: Option<i64>,
    /// Lower bound of the class size range, in deadweight tons.
    pub from_size: Option<i64>,
    /// Upper bound of the class size range, in deadweight tons.
    pub to_size: Option<i64>,
    pub vessel_type: Option<String>,
}
