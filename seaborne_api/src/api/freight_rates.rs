use crate::client::Connection;
use crate::filter::PortFilter;
use crate::parse::freight_rates::{parse_freight_pricing, parse_ports};
use crate::query::{FreightRatesQuery, NoQuery};
use crate::types::{freight_rates::Port, FreightRatesPricing, VesselSubclass};
use crate::Error;

const BASE_PATH: &str = "freight-rates/api/v1";

/// Freight rates between a load port and one or more discharge ports.
#[derive(Clone, Debug)]
pub struct FreightRatesApi {
    connection: Connection,
}

impl FreightRatesApi {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Returns the fixed catalog of vessel subclasses.
    pub fn get_vessel_subclasses(&self) -> &'static [VesselSubclass] {
        &VesselSubclass::ALL
    }

    pub async fn get_ports(&self, filter: &PortFilter) -> Result<Vec<Port>, Error> {
        let body = self
            .connection
            .get(&format!("{}/ports", BASE_PATH), None::<&NoQuery>)
            .await?
            .into_json()?;
        let ports = parse_ports(&body)?;
        Ok(filter.apply(&ports).cloned().collect())
    }

    pub async fn get_freight_pricing(
        &self,
        query: &FreightRatesQuery,
    ) -> Result<Vec<FreightRatesPricing>, Error> {
        let body = self
            .connection
            .get(&format!("{}/pricing", BASE_PATH), Some(query))
            .await?
            .into_json()?;
        Ok(parse_freight_pricing(&body)?)
    }
}
