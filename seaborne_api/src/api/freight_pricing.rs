use crate::client::Connection;
use crate::filter::{PortFilter, VesselTypeFilter};
use crate::parse::freight_pricing::{parse_freight_pricing, parse_ports};
use crate::query::{FreightPricingQuery, NoQuery};
use crate::types::{freight_pricing::Port, FreightPricing, VesselType, VESSEL_TYPES};
use crate::Error;

const BASE_PATH: &str = "freight/api/Freight/v1";

/// Freight pricing for a vessel type between sets of load and discharge ports.
#[derive(Clone, Debug)]
pub struct FreightPricingApi {
    connection: Connection,
}

impl FreightPricingApi {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Returns the vessel types the pricing endpoint accepts, narrowed by `filter`.
    ///
    /// The catalog is fixed, so no request is made.
    pub fn get_vessel_types(&self, filter: &VesselTypeFilter) -> Vec<VesselType> {
        filter.apply(&VESSEL_TYPES).copied().collect()
    }

    /// Fetches the ports available for pricing, narrowed by `filter`.
    pub async fn get_ports(&self, filter: &PortFilter) -> Result<Vec<Port>, Error> {
        let body = self
            .connection
            .get(&format!("{}/ports", BASE_PATH), None::<&NoQuery>)
            .await?
            .into_json()?;
        let ports = parse_ports(&body)?;
        Ok(filter.apply(&ports).cloned().collect())
    }

    /// Fetches freight pricing for every vessel class of the query's vessel type.
    pub async fn get_freight_pricing(
        &self,
        query: &FreightPricingQuery,
    ) -> Result<Vec<FreightPricing>, Error> {
        let body = self
            .connection
            .get(&format!("{}/pricing", BASE_PATH), Some(query))
            .await?
            .into_json()?;
        Ok(parse_freight_pricing(&body)?)
    }
}
