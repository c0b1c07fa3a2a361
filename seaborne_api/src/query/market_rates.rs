use chrono::NaiveDate;
use url::Url;

use super::common::{format_date, BoolFormat, Query};

/// Query for the market rates endpoint. `is_clean` is sent as `1`/`0`.
#[derive(Clone, Debug)]
pub struct MarketRatesQuery {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub route_id: Option<String>,
    pub vessel_class_id: Option<i64>,
    pub is_clean: Option<bool>,
}

impl MarketRatesQuery {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
            route_id: None,
            vessel_class_id: None,
            is_clean: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_route_id(mut self, route_id: &str) -> Self {
        self.route_id = Some(route_id.to_string());
        self
    }

    pub fn with_vessel_class_id(mut self, vessel_class_id: i64) -> Self {
        self.vessel_class_id = Some(vessel_class_id);
        self
    }

    pub fn with_is_clean(mut self, is_clean: bool) -> Self {
        self.is_clean = Some(is_clean);
        self
    }
}

impl Query for MarketRatesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &format_date(self.start_date));
        if let Some(end_date) = self.end_date {
            url.query_pairs_mut()
                .append_pair("end_date", &format_date(end_date));
        }
        if let Some(route_id) = &self.route_id {
            url.query_pairs_mut().append_pair("route_id", route_id);
        }
        if let Some(vessel_class_id) = self.vessel_class_id {
            url.query_pairs_mut()
                .append_pair("vessel_class_id", &vessel_class_id.to_string());
        }
        if let Some(is_clean) = self.is_clean {
            url.query_pairs_mut()
                .append_pair("is_clean", BoolFormat::Numeric.format(is_clean));
        }
        url
    }
}

/// Query for the routes endpoint.
#[derive(Clone, Debug, Default)]
pub struct RoutesQuery {
    pub vessel_class_id: Option<i64>,
}

impl RoutesQuery {
    pub fn with_vessel_class_id(mut self, vessel_class_id: i64) -> Self {
        self.vessel_class_id = Some(vessel_class_id);
        self
    }
}

impl Query for RoutesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(vessel_class_id) = self.vessel_class_id {
            url.query_pairs_mut()
                .append_pair("vessel_class_id", &vessel_class_id.to_string());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_market_rates_query() {
        let url = Url::parse("https://example.com").unwrap();
        let start = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();

        insta::assert_snapshot!(
            MarketRatesQuery::new(start).add_to_url(&url).to_string(),
            @"https://example.com/?start_date=2021-05-01"
        );

        insta::assert_snapshot!(
            MarketRatesQuery::new(start)
                .with_end_date(NaiveDate::from_ymd_opt(2021, 5, 31).unwrap())
                .with_route_id("TD3C")
                .with_vessel_class_id(84)
                .with_is_clean(false)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?start_date=2021-05-01&end_date=2021-05-31&route_id=TD3C&vessel_class_id=84&is_clean=0"
        );
    }

    #[test]
    fn test_routes_query() {
        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(RoutesQuery::default().add_to_url(&url).query(), None);
        assert_eq!(
            RoutesQuery::default()
                .with_vessel_class_id(86)
                .add_to_url(&url)
                .query(),
            Some("vessel_class_id=86")
        );
    }
}
