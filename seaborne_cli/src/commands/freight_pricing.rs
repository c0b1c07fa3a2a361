use anyhow::Result;
use clap::Args;
use seaborne_api::filter::{PortFilter, VesselTypeFilter};
use seaborne_api::types::freight_pricing::Port;
use seaborne_api::types::{VesselType, VESSEL_TYPES};
use seaborne_api::{Connection, FreightPricingApi, FreightPricingQuery};

use crate::commands::NameArgs;
use crate::output::{print_freight_pricing, print_pricing_ports, print_vessel_types, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct FreightPricingArgs {
    /// Vessel type id: 1 (Tanker), 3 (Dry), 4 (Container), 5 (LNG), 6 (LPG)
    #[arg(long)]
    pub vessel_type: i32,

    /// Pricing date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Load port id (repeatable)
    #[arg(long = "load-port")]
    pub load_ports: Vec<i64>,

    /// Discharge port id (repeatable)
    #[arg(long = "discharge-port")]
    pub discharge_ports: Vec<i64>,

    /// Price clean (true) or dirty (false) cargo
    #[arg(long)]
    pub is_clean: Option<bool>,
}

/// The vessel type catalog is fixed, so listing it needs no connection.
fn vessel_types(args: &NameArgs) -> Result<Vec<VesselType>> {
    let name = args.name.as_deref().map(validation::validate_name).transpose()?.flatten();
    Ok(VesselTypeFilter::new(name.as_deref())
        .apply(&VESSEL_TYPES)
        .copied()
        .collect())
}

pub fn run_vessel_types(args: &NameArgs, format: OutputFormat) -> Result<()> {
    print_vessel_types(&vessel_types(args)?, format)
}

pub async fn run_ports(args: &NameArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let name = args.name.as_deref().map(validation::validate_name).transpose()?.flatten();
    let api = FreightPricingApi::new(connection.clone());
    let ports = api.get_ports(&PortFilter::new(name.as_deref())).await?;
    eprintln!("{} ports", ports.len());
    print_pricing_ports(&ports, format)
}

fn port_ref(id: i64) -> Port {
    Port {
        id: Some(id),
        name: None,
    }
}

pub async fn run_pricing(
    args: &FreightPricingArgs,
    connection: &Connection,
    format: OutputFormat,
) -> Result<()> {
    let vessel_type = validation::validate_vessel_type(args.vessel_type)?;
    let date = validation::validate_date(&args.date)?;

    let load_ports: Vec<Port> = args.load_ports.iter().copied().map(port_ref).collect();
    let discharge_ports: Vec<Port> = args.discharge_ports.iter().copied().map(port_ref).collect();

    let mut query = FreightPricingQuery::new(vessel_type, date)
        .with_load_ports(&load_ports)
        .with_discharge_ports(&discharge_ports);
    if let Some(is_clean) = args.is_clean {
        query = query.with_is_clean(is_clean);
    }

    let api = FreightPricingApi::new(connection.clone());
    let pricing = api.get_freight_pricing(&query).await?;
    print_freight_pricing(&pricing, format)
}
