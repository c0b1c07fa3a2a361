//! Geography records: countries, ports, areas and geo assets.
//!
//! Ports, areas and geo assets hang off a hierarchy of areas (level 0 is the
//! broadest, level 3 the narrowest) and a location taxonomy. Every parent
//! reference is optional, and so are ids and names: the catalogs are not
//! guaranteed complete.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: Option<String>,
    /// ISO 3166-1 numeric code.
    pub country_code_numeric: Option<String>,
    /// ISO 3166-1 alpha-3 code.
    pub country_code_iso3: Option<String>,
    pub area_id_level0: Option<i64>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub country_id: Option<i64>,
    pub area_id_level0: Option<i64>,
    pub area_id_level1: Option<i64>,
    pub area_id_level2: Option<i64>,
    pub area_id_level3: Option<i64>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub location_taxonomy_id: Option<i64>,
    /// Where the port record originates from, e.g. `"Signal"` or `"Customer"`.
    pub source: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location_taxonomy_id: Option<i64>,
    /// The enclosing area, if any.
    pub parent_area_id: Option<i64>,
}

/// A named installation (terminal, anchorage, shipyard) inside or near a port.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeoAsset {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub port_id: Option<i64>,
    pub country_id: Option<i64>,
    pub location_taxonomy_id: Option<i64>,
    pub area_id_level0: Option<i64>,
    pub area_id_level1: Option<i64>,
    pub area_id_level2: Option<i64>,
    pub area_id_level3: Option<i64>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}
