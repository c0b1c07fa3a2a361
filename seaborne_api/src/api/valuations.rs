use chrono::NaiveDate;

use crate::client::Connection;
use crate::parse::valuations::{parse_valuation, parse_valuations};
use crate::query::{LatestValuationsQuery, NoQuery, ValuationDateQuery};
use crate::types::Valuation;
use crate::Error;

const BASE_PATH: &str = "vessel-valuations/api/v1/valuations";

/// Estimated market values of individual vessels, keyed by IMO number.
#[derive(Clone, Debug)]
pub struct VesselValuationsApi {
    connection: Connection,
}

impl VesselValuationsApi {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Latest valuation of a vessel, or `None` when the vessel has none.
    pub async fn get_latest_valuation(&self, imo: i64) -> Result<Option<Valuation>, Error> {
        let body = self
            .connection
            .get(&format!("{}/{}/latest", BASE_PATH, imo), None::<&NoQuery>)
            .await?
            .into_optional_json()?;
        Ok(body.map(|body| parse_valuation(&body)).transpose()?)
    }

    /// Valuation in force on `date`, or `None` when there is none.
    pub async fn get_valuation_for_date(
        &self,
        imo: i64,
        date: NaiveDate,
    ) -> Result<Option<Valuation>, Error> {
        let body = self
            .connection
            .get(
                &format!("{}/{}", BASE_PATH, imo),
                Some(&ValuationDateQuery { date }),
            )
            .await?
            .into_optional_json()?;
        Ok(body.map(|body| parse_valuation(&body)).transpose()?)
    }

    /// Every valuation of a vessel, oldest first as served.
    pub async fn get_valuation_history(&self, imo: i64) -> Result<Vec<Valuation>, Error> {
        let body = self
            .connection
            .get(&format!("{}/{}/history", BASE_PATH, imo), None::<&NoQuery>)
            .await?
            .into_json()?;
        Ok(parse_valuations(&body)?)
    }

    pub async fn get_latest_valuations(
        &self,
        query: &LatestValuationsQuery,
    ) -> Result<Vec<Valuation>, Error> {
        let body = self
            .connection
            .get(&format!("{}/latest", BASE_PATH), Some(query))
            .await?
            .into_json()?;
        Ok(parse_valuations(&body)?)
    }
}
