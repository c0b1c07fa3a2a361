use anyhow::Result;
use clap::Args;
use seaborne_api::filter::PortFilter;
use seaborne_api::types::freight_rates::Port;
use seaborne_api::{Connection, FreightRatesApi, FreightRatesQuery};

use crate::commands::NameArgs;
use crate::output::{print_freight_rates, print_rates_ports, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct RatesPricingArgs {
    /// Load port id
    #[arg(long)]
    pub load_port: Option<i64>,

    /// Discharge port id (repeatable)
    #[arg(long = "discharge-port")]
    pub discharge_ports: Vec<i64>,

    /// Vessel class id
    #[arg(long)]
    pub vessel_class_id: Option<i64>,

    /// Vessel subclass: all, dirty, clean
    #[arg(long, default_value = "all")]
    pub subclass: String,

    /// Pricing date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

pub async fn run_ports(args: &NameArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let name = args.name.as_deref().map(validation::validate_name).transpose()?.flatten();
    let api = FreightRatesApi::new(connection.clone());
    let ports = api.get_ports(&PortFilter::new(name.as_deref())).await?;
    eprintln!("{} ports", ports.len());
    print_rates_ports(&ports, format)
}

fn port_ref(id: i64) -> Port {
    Port {
        id: Some(id),
        name: None,
    }
}

pub async fn run_pricing(
    args: &RatesPricingArgs,
    connection: &Connection,
    format: OutputFormat,
) -> Result<()> {
    let discharge_ports: Vec<Port> = args.discharge_ports.iter().copied().map(port_ref).collect();

    let mut query = FreightRatesQuery::default()
        .with_discharge_ports(&discharge_ports)
        .with_vessel_subclass(validation::validate_subclass(&args.subclass)?);
    if let Some(load_port) = args.load_port {
        query = query.with_load_port(&port_ref(load_port));
    }
    if let Some(vessel_class_id) = args.vessel_class_id {
        query = query.with_vessel_class_id(vessel_class_id);
    }
    if let Some(ref date) = args.date {
        query = query.with_date(validation::validate_date(date)?);
    }

    let api = FreightRatesApi::new(connection.clone());
    let pricing = api.get_freight_pricing(&query).await?;
    print_freight_rates(&pricing, format)
}
