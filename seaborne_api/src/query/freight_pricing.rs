use chrono::NaiveDate;
use url::Url;

use crate::types::{freight_pricing::Port, VesselType};

use super::common::{format_date, join_repeated, BoolFormat, Query};

/// Query for the freight pricing endpoint.
///
/// Ports are sent as a repeated-key join, `IsClean` as `True`/`False`.
#[derive(Clone, Debug)]
pub struct FreightPricingQuery {
    pub vessel_type: VesselType,
    pub date: NaiveDate,
    pub load_ports: Vec<i64>,
    pub discharge_ports: Vec<i64>,
    pub is_clean: Option<bool>,
}

impl FreightPricingQuery {
    pub fn new(vessel_type: VesselType, date: NaiveDate) -> Self {
        Self {
            vessel_type,
            date,
            load_ports: Vec::new(),
            discharge_ports: Vec::new(),
            is_clean: None,
        }
    }

    /// Ports without an id are ignored.
    pub fn with_load_port(mut self, port: &Port) -> Self {
        self.load_ports.extend(port.id);
        self
    }
    pub fn with_load_ports(mut self, ports: &[Port]) -> Self {
        self.load_ports.extend(ports.iter().filter_map(|p| p.id));
        self
    }

    pub fn with_discharge_port(mut self, port: &Port) -> Self {
        self.discharge_ports.extend(port.id);
        self
    }
    pub fn with_discharge_ports(mut self, ports: &[Port]) -> Self {
        self.discharge_ports.extend(ports.iter().filter_map(|p| p.id));
        self
    }

    pub fn with_is_clean(mut self, is_clean: bool) -> Self {
        self.is_clean = Some(is_clean);
        self
    }
}

impl Query for FreightPricingQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("VesselTypes", &self.vessel_type.id.to_string());
        if !self.load_ports.is_empty() {
            url.query_pairs_mut()
                .append_pair("LoadPorts", &join_repeated("LoadPorts", &self.load_ports));
        }
        if !self.discharge_ports.is_empty() {
            url.query_pairs_mut().append_pair(
                "DischargePorts",
                &join_repeated("DischargePorts", &self.discharge_ports),
            );
        }
        url.query_pairs_mut()
            .append_pair("Date", &format_date(self.date));
        if let Some(is_clean) = self.is_clean {
            url.query_pairs_mut()
                .append_pair("IsClean", BoolFormat::Literal.format(is_clean));
        }
        url
    }
}
