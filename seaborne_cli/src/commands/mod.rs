//! CLI subcommand implementations.

use clap::Args;

pub mod freight_pricing;
pub mod freight_rates;
pub mod geo;
pub mod market_rates;
pub mod valuations;

/// Shared arguments of the plain name-filtered listings.
#[derive(Args)]
pub struct NameArgs {
    /// Case-insensitive substring of the name
    #[arg(long)]
    pub name: Option<String>,
}
