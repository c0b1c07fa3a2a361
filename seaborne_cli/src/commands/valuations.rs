use anyhow::{bail, Result};
use clap::Args;
use seaborne_api::{Connection, LatestValuationsQuery, VesselValuationsApi};

use crate::output::{print_valuations, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct ValuationArgs {
    /// IMO number (repeatable; several IMOs fetch the latest valuation of each)
    #[arg(long = "imo", required = true)]
    pub imos: Vec<i64>,

    /// Valuation as of this date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "history")]
    pub date: Option<String>,

    /// Full valuation history
    #[arg(long)]
    pub history: bool,
}

pub async fn run(args: &ValuationArgs, connection: &Connection, format: OutputFormat) -> Result<()> {
    let imos = args
        .imos
        .iter()
        .map(|&imo| validation::validate_imo(imo))
        .collect::<Result<Vec<_>>>()?;
    let api = VesselValuationsApi::new(connection.clone());

    let valuations = match imos.as_slice() {
        [imo] if args.history => api.get_valuation_history(*imo).await?,
        [imo] => {
            let valuation = match args.date {
                Some(ref date) => {
                    let date = validation::validate_date(date)?;
                    api.get_valuation_for_date(*imo, date).await?
                }
                None => api.get_latest_valuation(*imo).await?,
            };
            if valuation.is_none() {
                eprintln!("No valuation for IMO {}", imo);
            }
            valuation.into_iter().collect()
        }
        _ if args.history || args.date.is_some() => {
            bail!("--history and --date take a single --imo")
        }
        _ => {
            let query = LatestValuationsQuery::default().with_imos(&imos);
            api.get_latest_valuations(&query).await?
        }
    };

    print_valuations(&valuations, format)
}
