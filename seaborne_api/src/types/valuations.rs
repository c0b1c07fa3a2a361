//! Vessel valuation records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Estimated market value of a vessel at a point in time.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    /// IMO number of the vessel.
    pub imo: Option<i64>,
    /// Valuation in millions of USD.
    pub valuation_price: Option<Decimal>,
    pub valuation_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
}
