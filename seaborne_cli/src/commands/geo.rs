use anyhow::Result;
use clap::Args;
use seaborne_api::filter::{AreaFilter, CountryFilter, PortFilter};
use seaborne_api::{Connection, GeoApi};

use crate::output::{print_areas, print_countries, print_geo_assets, print_ports, OutputFormat};
use crate::validation;

/// Either a name-filtered listing or a lookup of one entity by id.
#[derive(Args)]
pub struct GeoArgs {
    /// Look up a single entry by id
    #[arg(long, conflicts_with = "name")]
    pub id: Option<i64>,

    /// Case-insensitive substring of the name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct GeoAssetArgs {
    /// Look up a single geo asset by id
    #[arg(long)]
    pub id: Option<i64>,
}

impl GeoArgs {
    fn name(&self) -> Result<Option<String>> {
        Ok(self
            .name
            .as_deref()
            .map(validation::validate_name)
            .transpose()?
            .flatten())
    }
}

fn not_found(kind: &str, id: i64) {
    eprintln!("No {} with id {}", kind, id);
}

pub async fn run_countries(args: &GeoArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let api = GeoApi::new(connection.clone());
    let countries: Vec<_> = match args.id {
        Some(id) => api.get_country(id).await?.into_iter().collect(),
        None => api.get_countries(&CountryFilter::new(args.name()?.as_deref())).await?,
    };
    if let (Some(id), true) = (args.id, countries.is_empty()) {
        not_found("country", id);
    }
    print_countries(&countries, format)
}

pub async fn run_ports(args: &GeoArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let api = GeoApi::new(connection.clone());
    let ports: Vec<_> = match args.id {
        Some(id) => api.get_port(id).await?.into_iter().collect(),
        None => api.get_ports(&PortFilter::new(args.name()?.as_deref())).await?,
    };
    if let (Some(id), true) = (args.id, ports.is_empty()) {
        not_found("port", id);
    }
    print_ports(&ports, format)
}

pub async fn run_areas(args: &GeoArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let api = GeoApi::new(connection.clone());
    let areas: Vec<_> = match args.id {
        Some(id) => api.get_area(id).await?.into_iter().collect(),
        None => api.get_areas(&AreaFilter::new(args.name()?.as_deref())).await?,
    };
    if let (Some(id), true) = (args.id, areas.is_empty()) {
        not_found("area", id);
    }
    print_areas(&areas, format)
}

pub async fn run_geo_assets(
    args: &GeoAssetArgs,
    connection: &Connection,
    format: OutputFormat,
) -> Result<()> {
    let api = GeoApi::new(connection.clone());
    let assets: Vec<_> = match args.id {
        Some(id) => api.get_geo_asset(id).await?.into_iter().collect(),
        None => api.get_geo_assets().await?,
    };
    if let (Some(id), true) = (args.id, assets.is_empty()) {
        not_found("geo asset", id);
    }
    print_geo_assets(&assets, format)
}
