//! Parsers for the geography API. One parser per entity kind, each reading
//! its fields one by one.

use serde_json::Value;

use crate::errors::ParseError;
use crate::json::{opt_code, opt_decimal, opt_i64, opt_str, Object};
use crate::types::geo::{Area, Country, GeoAsset, Port};

use super::parse_list;

pub fn parse_country(obj: &Object) -> Result<Country, ParseError> {
    Ok(Country {
        id: opt_i64(obj, "id")?,
        name: opt_str(obj, "name")?,
        country_code: opt_code(obj, "countryCode")?,
        country_code_numeric: opt_code(obj, "countryCodeNumeric")?,
        country_code_iso3: opt_code(obj, "countryCodeISO3")?,
        area_id_level0: opt_i64(obj, "areaIdLevel0")?,
    })
}

pub fn parse_port(obj: &Object) -> Result<Port, ParseError> {
    Ok(Port {
        id: opt_i64(obj, "id")?,
        name: opt_str(obj, "name")?,
        country_id: opt_i64(obj, "countryId")?,
        area_id_level0: opt_i64(obj, "areaIdLevel0")?,
        area_id_level1: opt_i64(obj, "areaIdLevel1")?,
        area_id_level2: opt_i64(obj, "areaIdLevel2")?,
        area_id_level3: opt_i64(obj, "areaIdLevel3")?,
        latitude: opt_decimal(obj, "latitude")?,
        longitude: opt_decimal(obj, "longitude")?,
        location_taxonomy_id: opt_i64(obj, "locationTaxonomyId")?,
        source: opt_str(obj, "source")?,
    })
}

pub fn parse_area(obj: &Object) -> Result<Area, ParseError> {
    Ok(Area {
        id: opt_i64(obj, "id")?,
        name: opt_str(obj, "name")?,
        location_taxonomy_id: opt_i64(obj, "locationTaxonomyId")?,
        parent_area_id: opt_i64(obj, "parentAreaId")?,
    })
}

pub fn parse_geo_asset(obj: &Object) -> Result<GeoAsset, ParseError> {
    Ok(GeoAsset {
        id: opt_i64(obj, "id")?,
        name: opt_str(obj, "name")?,
        port_id: opt_i64(obj, "portId")?,
        country_id: opt_i64(obj, "countryId")?,
        location_taxonomy_id: opt_i64(obj, "locationTaxonomyId")?,
        area_id_level0: opt_i64(obj, "areaIdLevel0")?,
        area_id_level1: opt_i64(obj, "areaIdLevel1")?,
        area_id_level2: opt_i64(obj, "areaIdLevel2")?,
        area_id_level3: opt_i64(obj, "areaIdLevel3")?,
        latitude: opt_decimal(obj, "latitude")?,
        longitude: opt_decimal(obj, "longitude")?,
    })
}

pub fn parse_countries(value: &Value) -> Result<Vec<Country>, ParseError> {
    parse_list(value, "countries", parse_country)
}

pub fn parse_ports(value: &Value) -> Result<Vec<Port>, ParseError> {
    parse_list(value, "ports", parse_port)
}

pub fn parse_areas(value: &Value) -> Result<Vec<Area>, ParseError> {
    parse_list(value, "areas", parse_area)
}

pub fn parse_geo_assets(value: &Value) -> Result<Vec<GeoAsset>, ParseError> {
    parse_list(value, "geo assets", parse_geo_asset)
}
