use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use seaborne_api::types::freight_pricing::Port as PricingPort;
use seaborne_api::types::freight_rates::Port as RatesPort;
use seaborne_api::types::{
    Area, Country, FreightPricing, FreightRatesPricing, GeoAsset, MarketRate, Port, Route,
    Valuation, VesselClass, VesselType,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct IdNameRow {
    id: String,
    name: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct FreightPricingRow {
    vessel_class: String,
    cargo_quantity: String,
    freight_rate: String,
    freight_cost: String,
    canal: String,
    total_cost: String,
    total_cost_per_ton: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct FreightRatesRow {
    vessel_type: String,
    vessel_class: String,
    load_port: String,
    discharge_port: String,
    cargo_quantity: String,
    freight_rate: String,
    freight_cost: String,
    total_cost: String,
    total_cost_per_ton: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct CountryRow {
    id: String,
    name: String,
    country_code: String,
    country_code_iso3: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct PortRow {
    id: String,
    name: String,
    country_id: String,
    latitude: String,
    longitude: String,
    source: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct AreaRow {
    id: String,
    name: String,
    location_taxonomy_id: String,
    parent_area_id: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct GeoAssetRow {
    id: String,
    name: String,
    port_id: String,
    country_id: String,
    latitude: String,
    longitude: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct RouteRow {
    id: String,
    description: String,
    unit: String,
    vessel_class_id: String,
    deprecated_to: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct VesselClassRow {
    id: String,
    name: String,
    vessel_type: String,
    from_size: String,
    to_size: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct MarketRateRow {
    route_id: String,
    rate_date: String,
    rate: String,
    unit: String,
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
struct ValuationRow {
    imo: String,
    valuation_price: String,
    valuation_date: String,
    updated_date: String,
}

// -- Row builders --

/// Renders an absent value as an empty cell.
fn cell<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn date_cell(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn build_vessel_type_rows(vessel_types: &[VesselType]) -> Vec<IdNameRow> {
    vessel_types
        .iter()
        .map(|vt| IdNameRow {
            id: vt.id.to_string(),
            name: vt.name.to_string(),
        })
        .collect()
}

fn build_pricing_port_rows(ports: &[PricingPort]) -> Vec<IdNameRow> {
    ports
        .iter()
        .map(|p| IdNameRow {
            id: cell(&p.id),
            name: cell(&p.name),
        })
        .collect()
}

fn build_rates_port_rows(ports: &[RatesPort]) -> Vec<IdNameRow> {
    ports
        .iter()
        .map(|p| IdNameRow {
            id: cell(&p.id),
            name: cell(&p.name),
        })
        .collect()
}

fn build_freight_pricing_rows(pricing: &[FreightPricing]) -> Vec<FreightPricingRow> {
    pricing
        .iter()
        .map(|p| FreightPricingRow {
            vessel_class: cell(&p.vessel_class),
            cargo_quantity: cell(&p.cargo_quantity),
            freight_rate: cell(&p.costs.freight_rate),
            freight_cost: cell(&p.costs.freight_cost),
            canal: cell(&p.costs.canal),
            total_cost: cell(&p.totals.total_cost),
            total_cost_per_ton: cell(&p.totals.total_cost_per_ton),
        })
        .collect()
}

fn build_freight_rates_rows(pricing: &[FreightRatesPricing]) -> Vec<FreightRatesRow> {
    pricing
        .iter()
        .map(|p| FreightRatesRow {
            vessel_type: cell(&p.vessel_type),
            vessel_class: cell(&p.vessel_class),
            load_port: cell(&p.load_port.name),
            discharge_port: cell(&p.discharge_port.name),
            cargo_quantity: cell(&p.cargo_quantity),
            freight_rate: cell(&p.costs.freight_rate),
            freight_cost: cell(&p.costs.freight_cost),
            total_cost: cell(&p.totals.total_cost),
            total_cost_per_ton: cell(&p.totals.total_cost_per_ton),
        })
        .collect()
}

fn build_country_rows(countries: &[Country]) -> Vec<CountryRow> {
    countries
        .iter()
        .map(|c| CountryRow {
            id: cell(&c.id),
            name: cell(&c.name),
            country_code: cell(&c.country_code),
            country_code_iso3: cell(&c.country_code_iso3),
        })
        .collect()
}

fn build_port_rows(ports: &[Port]) -> Vec<PortRow> {
    ports
        .iter()
        .map(|p| PortRow {
            id: cell(&p.id),
            name: cell(&p.name),
            country_id: cell(&p.country_id),
            latitude: cell(&p.latitude),
            longitude: cell(&p.longitude),
            source: cell(&p.source),
        })
        .collect()
}

fn build_area_rows(areas: &[Area]) -> Vec<AreaRow> {
    areas
        .iter()
        .map(|a| AreaRow {
            id: cell(&a.id),
            name: cell(&a.name),
            location_taxonomy_id: cell(&a.location_taxonomy_id),
            parent_area_id: cell(&a.parent_area_id),
        })
        .collect()
}

fn build_geo_asset_rows(assets: &[GeoAsset]) -> Vec<GeoAssetRow> {
    assets
        .iter()
        .map(|a| GeoAssetRow {
            id: cell(&a.id),
            name: cell(&a.name),
            port_id: cell(&a.port_id),
            country_id: cell(&a.country_id),
            latitude: cell(&a.latitude),
            longitude: cell(&a.longitude),
        })
        .collect()
}

fn build_route_rows(routes: &[Route]) -> Vec<RouteRow> {
    routes
        .iter()
        .map(|r| RouteRow {
            id: cell(&r.id),
            description: cell(&r.description),
            unit: cell(&r.unit),
            vessel_class_id: cell(&r.vessel_class_id),
            deprecated_to: cell(&r.deprecated_to),
        })
        .collect()
}

fn build_vessel_class_rows(classes: &[VesselClass]) -> Vec<VesselClassRow> {
    classes
        .iter()
        .map(|c| VesselClassRow {
            id: cell(&c.id),
            name: cell(&c.name),
            vessel_type: cell(&c.vessel_type),
            from_size: cell(&c.from_size),
            to_size: cell(&c.to_size),
        })
        .collect()
}

fn build_market_rate_rows(rates: &[MarketRate]) -> Vec<MarketRateRow> {
    rates
        .iter()
        .map(|r| MarketRateRow {
            route_id: cell(&r.route_id),
            rate_date: date_cell(&r.rate_date),
            rate: cell(&r.rate),
            unit: cell(&r.unit),
        })
        .collect()
}

fn build_valuation_rows(valuations: &[Valuation]) -> Vec<ValuationRow> {
    valuations
        .iter()
        .map(|v| ValuationRow {
            imo: cell(&v.imo),
            valuation_price: cell(&v.valuation_price),
            valuation_date: date_cell(&v.valuation_date),
            updated_date: date_cell(&v.updated_date),
        })
        .collect()
}

// -- Generic printers --

/// JSON prints the records themselves; every other format prints the
/// flattened rows.
fn print<T, R>(records: &[T], rows: Vec<R>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}

fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Per-record entry points --

pub fn print_vessel_types(vessel_types: &[VesselType], format: OutputFormat) -> Result<()> {
    print(vessel_types, build_vessel_type_rows(vessel_types), format)
}

pub fn print_pricing_ports(ports: &[PricingPort], format: OutputFormat) -> Result<()> {
    print(ports, build_pricing_port_rows(ports), format)
}

pub fn print_rates_ports(ports: &[RatesPort], format: OutputFormat) -> Result<()> {
    print(ports, build_rates_port_rows(ports), format)
}

pub fn print_freight_pricing(pricing: &[FreightPricing], format: OutputFormat) -> Result<()> {
    print(pricing, build_freight_pricing_rows(pricing), format)
}

pub fn print_freight_rates(pricing: &[FreightRatesPricing], format: OutputFormat) -> Result<()> {
    print(pricing, build_freight_rates_rows(pricing), format)
}

pub fn print_countries(countries: &[Country], format: OutputFormat) -> Result<()> {
    print(countries, build_country_rows(countries), format)
}

pub fn print_ports(ports: &[Port], format: OutputFormat) -> Result<()> {
    print(ports, build_port_rows(ports), format)
}

pub fn print_areas(areas: &[Area], format: OutputFormat) -> Result<()> {
    print(areas, build_area_rows(areas), format)
}

pub fn print_geo_assets(assets: &[GeoAsset], format: OutputFormat) -> Result<()> {
    print(assets, build_geo_asset_rows(assets), format)
}

pub fn print_routes(routes: &[Route], format: OutputFormat) -> Result<()> {
    print(routes, build_route_rows(routes), format)
}

pub fn print_vessel_classes(classes: &[VesselClass], format: OutputFormat) -> Result<()> {
    print(classes, build_vessel_class_rows(classes), format)
}

pub fn print_market_rates(rates: &[MarketRate], format: OutputFormat) -> Result<()> {
    print(rates, build_market_rate_rows(rates), format)
}

pub fn print_valuations(valuations: &[Valuation], format: OutputFormat) -> Result<()> {
    print(valuations, build_valuation_rows(valuations), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use seaborne_api::types::{Costs, FreightCosts, FreightTotals, Totals, VESSEL_TYPES};
    use std::str::FromStr;

    fn dec(s: &str) -> Option<Decimal> {
        Some(Decimal::from_str(s).unwrap())
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    fn suezmax() -> FreightPricing {
        FreightPricing {
            vessel_class: Some("Suezmax".to_string()),
            cargo_quantity: dec("130000"),
            costs: Costs {
                freight_rate: dec("5.330548"),
                freight_cost: dec("692971.24"),
                canal: None,
            },
            totals: Totals {
                total_cost: dec("692971.24"),
                total_cost_per_ton: dec("5.330548"),
            },
        }
    }

    #[test]
    fn test_cell_absent_is_empty() {
        assert_eq!(cell::<i64>(&None), "");
        assert_eq!(cell(&dec("1.500")), "1.500");
    }

    #[test]
    fn test_build_vessel_type_rows() {
        let rows = build_vessel_type_rows(&VESSEL_TYPES);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[3].id, "5");
        assert_eq!(rows[3].name, "LNG");
    }

    #[test]
    fn test_build_freight_pricing_rows_keeps_precision() {
        let rows = build_freight_pricing_rows(&[suezmax()]);
        let row = &rows[0];
        assert_eq!(row.vessel_class, "Suezmax");
        assert_eq!(row.freight_rate, "5.330548");
        assert_eq!(row.freight_cost, "692971.24");
        assert_eq!(row.canal, "");
    }

    #[test]
    fn test_build_freight_rates_rows_placeholder_ports() {
        let pricing = FreightRatesPricing {
            vessel_type: Some("Tanker".to_string()),
            vessel_class: Some("LR2".to_string()),
            cargo_quantity: dec("75000"),
            load_port: RatesPort::default(),
            discharge_port: RatesPort {
                id: Some(3467),
                name: Some("Rotterdam".to_string()),
            },
            costs: FreightCosts::default(),
            totals: FreightTotals::default(),
        };
        let rows = build_freight_rates_rows(&[pricing]);
        assert_eq!(rows[0].load_port, "");
        assert_eq!(rows[0].discharge_port, "Rotterdam");
    }

    #[test]
    fn test_build_market_rate_rows_date_only() {
        let rate = MarketRate {
            route_id: Some("TD3C".to_string()),
            rate_date: Some(Utc.with_ymd_and_hms(2021, 5, 4, 0, 0, 0).unwrap()),
            rate: Some(47.5),
            unit: Some("WS".to_string()),
            vessel_class_id: Some(84),
        };
        let rows = build_market_rate_rows(&[rate]);
        assert_eq!(rows[0].rate_date, "2021-05-04");
        assert_eq!(rows[0].rate, "47.5");
    }

    #[test]
    fn test_build_port_rows_unnamed_port() {
        let port = Port {
            id: Some(2),
            name: None,
            country_id: None,
            area_id_level0: None,
            area_id_level1: None,
            area_id_level2: None,
            area_id_level3: None,
            latitude: None,
            longitude: None,
            location_taxonomy_id: None,
            source: None,
        };
        let rows = build_port_rows(&[port]);
        assert_eq!(rows[0].id, "2");
        assert_eq!(rows[0].name, "");
    }

    #[test]
    fn test_build_rows_empty() {
        assert!(build_port_rows(&[]).is_empty());
        assert!(build_valuation_rows(&[]).is_empty());
    }

    #[test]
    fn test_csv_freight_pricing_headers() {
        let csv = csv_from_rows(&build_freight_pricing_rows(&[suezmax()]));
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "vesselClass,cargoQuantity,freightRate,freightCost,canal,totalCost,totalCostPerTon"
        );
    }

    #[test]
    fn test_csv_valuation_headers() {
        let valuation = Valuation {
            imo: Some(9867293),
            valuation_price: dec("84.25"),
            valuation_date: None,
            updated_date: None,
        };
        let csv = csv_from_rows(&build_valuation_rows(&[valuation]));
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "imo,valuationPrice,valuationDate,updatedDate"
        );
        assert_eq!(lines.next().unwrap(), "9867293,84.25,,");
    }

    #[test]
    fn test_markdown_table_has_pipes() {
        let mut table = Table::new(build_vessel_type_rows(&VESSEL_TYPES[..1]));
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.contains("| id | name   |"));
        assert!(rendered.contains("| 1  | Tanker |"));
    }

    #[test]
    fn test_json_uses_record_field_names() {
        let json = serde_json::to_value(suezmax()).unwrap();
        assert_eq!(json["vesselClass"], "Suezmax");
        assert!(json["costs"]["canal"].is_null());
    }
}
