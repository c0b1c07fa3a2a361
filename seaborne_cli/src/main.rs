mod commands;
mod output;
mod validation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seaborne_api::Connection;

#[derive(Parser)]
#[command(name = "seaborne")]
#[command(about = "Query freight pricing, market rates, geography and vessel valuations")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the vessel types accepted by freight pricing
    VesselTypes(commands::NameArgs),
    /// List freight pricing ports
    FreightPorts(commands::NameArgs),
    /// Price a voyage for a vessel type
    FreightPricing(commands::freight_pricing::FreightPricingArgs),
    /// List freight rates ports
    RatesPorts(commands::NameArgs),
    /// Price a voyage per vessel class
    RatesPricing(commands::freight_rates::RatesPricingArgs),
    /// List or look up countries
    Countries(commands::geo::GeoArgs),
    /// List or look up ports
    Ports(commands::geo::GeoArgs),
    /// List or look up areas
    Areas(commands::geo::GeoArgs),
    /// List or look up geo assets
    GeoAssets(commands::geo::GeoAssetArgs),
    /// List market rate routes
    Routes(commands::market_rates::RoutesArgs),
    /// List vessel classes
    VesselClasses(commands::NameArgs),
    /// Market rates over a date range
    MarketRates(commands::market_rates::MarketRatesArgs),
    /// Vessel valuations by IMO number
    Valuation(commands::valuations::ValuationArgs),
}

fn connection_from_env() -> Result<Connection> {
    let api_key = std::env::var("SEABORNE_API_KEY")
        .context("SEABORNE_API_KEY is not set (export it or add it to .env)")?;
    let connection = match std::env::var("SEABORNE_API_HOST") {
        Ok(host) => Connection::with_host(&host, &api_key)?,
        Err(_) => Connection::new(&api_key)?,
    };
    Ok(connection)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seaborne=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = validation::validate_output_format(&cli.output)?;

    match &cli.command {
        Commands::VesselTypes(args) => commands::freight_pricing::run_vessel_types(args, format)?,
        Commands::FreightPorts(args) => {
            let connection = connection_from_env()?;
            commands::freight_pricing::run_ports(args, &connection, format).await?
        }
        Commands::FreightPricing(args) => {
            let connection = connection_from_env()?;
            commands::freight_pricing::run_pricing(args, &connection, format).await?
        }
        Commands::RatesPorts(args) => {
            let connection = connection_from_env()?;
            commands::freight_rates::run_ports(args, &connection, format).await?
        }
        Commands::RatesPricing(args) => {
            let connection = connection_from_env()?;
            commands::freight_rates::run_pricing(args, &connection, format).await?
        }
        Commands::Countries(args) => {
            let connection = connection_from_env()?;
            commands::geo::run_countries(args, &connection, format).await?
        }
        Commands::Ports(args) => {
            let connection = connection_from_env()?;
            commands::geo::run_ports(args, &connection, format).await?
        }
        Commands::Areas(args) => {
            let connection = connection_from_env()?;
            commands::geo::run_areas(args, &connection, format).await?
        }
        Commands::GeoAssets(args) => {
            let connection = connection_from_env()?;
            commands::geo::run_geo_assets(args, &connection, format).await?
        }
        Commands::Routes(args) => {
            let connection = connection_from_env()?;
            commands::market_rates::run_routes(args, &connection, format).await?
        }
        Commands::VesselClasses(args) => {
            let connection = connection_from_env()?;
            commands::market_rates::run_vessel_classes(args, &connection, format).await?
        }
        Commands::MarketRates(args) => {
            let connection = connection_from_env()?;
            commands::market_rates::run_market_rates(args, &connection, format).await?
        }
        Commands::Valuation(args) => {
            let connection = connection_from_env()?;
            commands::valuations::run(args, &connection, format).await?
        }
    }

    Ok(())
}
