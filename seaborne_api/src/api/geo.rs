use crate::client::Connection;
use crate::filter::{AreaFilter, CountryFilter, PortFilter};
use crate::parse::geo::{
    parse_area, parse_areas, parse_countries, parse_country, parse_geo_asset, parse_geo_assets,
    parse_port, parse_ports,
};
use crate::parse::parse_single;
use crate::query::NoQuery;
use crate::types::{Area, Country, GeoAsset, Port};
use crate::Error;

const BASE_PATH: &str = "geo/v2";

/// Countries, ports, areas and geo assets.
///
/// Lookups by id return `Ok(None)` when the entity is not in the catalog.
#[derive(Clone, Debug)]
pub struct GeoApi {
    connection: Connection,
}

impl GeoApi {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    async fn get_list(&self, resource: &str) -> Result<serde_json::Value, Error> {
        self.connection
            .get(&format!("{}/{}", BASE_PATH, resource), None::<&NoQuery>)
            .await?
            .into_json()
    }

    async fn get_one(&self, resource: &str, id: i64) -> Result<Option<serde_json::Value>, Error> {
        self.connection
            .get(&format!("{}/{}/{}", BASE_PATH, resource, id), None::<&NoQuery>)
            .await?
            .into_optional_json()
    }

    pub async fn get_countries(&self, filter: &CountryFilter) -> Result<Vec<Country>, Error> {
        let countries = parse_countries(&self.get_list("countries").await?)?;
        Ok(filter.apply(&countries).cloned().collect())
    }

    pub async fn get_country(&self, country_id: i64) -> Result<Option<Country>, Error> {
        let body = self.get_one("countries", country_id).await?;
        Ok(body
            .map(|body| parse_single(&body, "country", parse_country))
            .transpose()?)
    }

    pub async fn get_ports(&self, filter: &PortFilter) -> Result<Vec<Port>, Error> {
        let ports = parse_ports(&self.get_list("ports").await?)?;
        Ok(filter.apply(&ports).cloned().collect())
    }

    pub async fn get_port(&self, port_id: i64) -> Result<Option<Port>, Error> {
        let body = self.get_one("ports", port_id).await?;
        Ok(body
            .map(|body| parse_single(&body, "port", parse_port))
            .transpose()?)
    }

    pub async fn get_areas(&self, filter: &AreaFilter) -> Result<Vec<Area>, Error> {
        let areas = parse_areas(&self.get_list("areas").await?)?;
        Ok(filter.apply(&areas).cloned().collect())
    }

    pub async fn get_area(&self, area_id: i64) -> Result<Option<Area>, Error> {
        let body = self.get_one("areas", area_id).await?;
        Ok(body
            .map(|body| parse_single(&body, "area", parse_area))
            .transpose()?)
    }

    pub async fn get_geo_assets(&self) -> Result<Vec<GeoAsset>, Error> {
        Ok(parse_geo_assets(&self.get_list("geoAssets").await?)?)
    }

    pub async fn get_geo_asset(&self, geo_asset_id: i64) -> Result<Option<GeoAsset>, Error> {
        let body = self.get_one("geoAssets", geo_asset_id).await?;
        Ok(body
            .map(|body| parse_single(&body, "geo asset", parse_geo_asset))
            .transpose()?)
    }
}
