use crate::client::Connection;
use crate::filter::VesselClassFilter;
use crate::parse::market_rates::{parse_market_rates, parse_routes, parse_vessel_classes};
use crate::query::{MarketRatesQuery, NoQuery, RoutesQuery};
use crate::types::{MarketRate, Route, VesselClass};
use crate::Error;

const BASE_PATH: &str = "market-rates/api/v1";

/// Daily market rate assessments per route.
#[derive(Clone, Debug)]
pub struct MarketRatesApi {
    connection: Connection,
}

impl MarketRatesApi {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Fetches the routes, optionally only those of one vessel class.
    ///
    /// Deprecated routes are returned as-is; their `deprecated_to` link is
    /// not resolved.
    pub async fn get_routes(&self, query: &RoutesQuery) -> Result<Vec<Route>, Error> {
        let body = self
            .connection
            .get(&format!("{}/routes", BASE_PATH), Some(query))
            .await?
            .into_json()?;
        Ok(parse_routes(&body)?)
    }

    pub async fn get_vessel_classes(
        &self,
        filter: &VesselClassFilter,
    ) -> Result<Vec<VesselClass>, Error> {
        let body = self
            .connection
            .get(&format!("{}/vessel_classes", BASE_PATH), None::<&NoQuery>)
            .await?
            .into_json()?;
        let classes = parse_vessel_classes(&body)?;
        Ok(filter.apply(&classes).cloned().collect())
    }

    pub async fn get_market_rates(&self, query: &MarketRatesQuery) -> Result<Vec<MarketRate>, Error> {
        let body = self
            .connection
            .get(&format!("{}/market_rates", BASE_PATH), Some(query))
            .await?
            .into_json()?;
        Ok(parse_market_rates(&body)?)
    }
}
