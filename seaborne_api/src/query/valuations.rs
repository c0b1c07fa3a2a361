use chrono::NaiveDate;
use url::Url;

use super::common::{format_date, join_commas, Query};

/// Query selecting the valuation in force on a given date.
#[derive(Clone, Copy, Debug)]
pub struct ValuationDateQuery {
    pub date: NaiveDate,
}

impl Query for ValuationDateQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("date", &format_date(self.date));
        url
    }
}

/// Query for the latest valuations of several vessels. IMOs are comma-joined.
#[derive(Clone, Debug, Default)]
pub struct LatestValuationsQuery {
    pub imos: Vec<i64>,
}

impl LatestValuationsQuery {
    pub fn with_imo(mut self, imo: i64) -> Self {
        self.imos.push(imo);
        self
    }
    pub fn with_imos(mut self, imos: &[i64]) -> Self {
        self.imos.extend_from_slice(imos);
        self
    }
}

impl Query for LatestValuationsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("imos", &join_commas(&self.imos));
        url
    }
}
