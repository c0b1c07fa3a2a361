use anyhow::Result;
use clap::Args;
use seaborne_api::filter::VesselClassFilter;
use seaborne_api::{Connection, MarketRatesApi, MarketRatesQuery, RoutesQuery};

use crate::commands::NameArgs;
use crate::output::{print_market_rates, print_routes, print_vessel_classes, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct RoutesArgs {
    /// Only routes for this vessel class id
    #[arg(long)]
    pub vessel_class_id: Option<i64>,

    /// Hide deprecated routes
    #[arg(long)]
    pub active: bool,
}

#[derive(Args)]
pub struct MarketRatesArgs {
    /// First rate date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,

    /// Last rate date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Route id, e.g. TD3C
    #[arg(long)]
    pub route_id: Option<String>,

    /// Vessel class id
    #[arg(long)]
    pub vessel_class_id: Option<i64>,

    /// Clean (true) or dirty (false) routes only
    #[arg(long)]
    pub is_clean: Option<bool>,
}

pub async fn run_routes(args: &RoutesArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let mut query = RoutesQuery::default();
    if let Some(vessel_class_id) = args.vessel_class_id {
        query = query.with_vessel_class_id(vessel_class_id);
    }

    let api = MarketRatesApi::new(connection.clone());
    let mut routes = api.get_routes(&query).await?;
    if args.active {
        routes.retain(|r| !r.is_deprecated());
    }
    print_routes(&routes, format)
}

pub async fn run_vessel_classes(
    args: &NameArgs,
    connection: &Connection,
    format: OutputFormat,
) -> Result<()> {
    let name = args.name.as_deref().map(validation::validate_name).transpose()?.flatten();
    let api = MarketRatesApi::new(connection.clone());
    let classes = api
        .get_vessel_classes(&VesselClassFilter::new(name.as_deref()))
        .await?;
    print_vessel_classes(&classes, format)
}

pub async fn run_market_rates(
    args: &MarketRatesArgs,
    connection: &Connection,
    format: OutputFormat,
) -> Result<()> {
    let start_date = validation::validate_date(&args.start_date)?;
    let end_date = args
        .end_date
        .as_deref()
        .map(validation::validate_date)
        .transpose()?;
    validation::validate_date_range(start_date, end_date)?;

    let mut query = MarketRatesQuery::new(start_date);
    if let Some(end_date) = end_date {
        query = query.with_end_date(end_date);
    }
    if let Some(ref route_id) = args.route_id {
        let route_id = validation::sanitize_text(route_id, validation::MAX_NAME_LENGTH)?;
        query = query.with_route_id(&route_id);
    }
    if let Some(vessel_class_id) = args.vessel_class_id {
        query = query.with_vessel_class_id(vessel_class_id);
    }
    if let Some(is_clean) = args.is_clean {
        query = query.with_is_clean(is_clean);
    }

    let api = MarketRatesApi::new(connection.clone());
    let rates = api.get_market_rates(&query).await?;
    eprintln!("{} market rates", rates.len());
    print_market_rates(&rates, format)
}
