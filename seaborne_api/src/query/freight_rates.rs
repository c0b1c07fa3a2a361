use chrono::NaiveDate;
use url::Url;

use crate::types::freight_rates::{Port, VesselSubclass};

use super::common::{format_date, join_repeated, Query};

/// Query for the freight rates pricing endpoint.
///
/// Discharge ports are sent as a repeated-key join; the subclass is sent by
/// name.
#[derive(Clone, Debug, Default)]
pub struct FreightRatesQuery {
    pub load_port: Option<i64>,
    pub discharge_ports: Vec<i64>,
    pub vessel_class_id: Option<i64>,
    pub vessel_subclass: VesselSubclass,
    pub date: Option<NaiveDate>,
}

impl FreightRatesQuery {
    /// Ports without an id (the placeholder port) are ignored.
    pub fn with_load_port(mut self, port: &Port) -> Self {
        if let Some(id) = port.id {
            self.load_port = Some(id);
        }
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

    pub fn with_vessel_class_id(mut self, vessel_class_id: i64) -> Self {
        self.vessel_class_id = Some(vessel_class_id);
        self
    }

    pub fn with_vessel_subclass(mut self, vessel_subclass: VesselSubclass) -> Self {
        self.vessel_subclass = vessel_subclass;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl Query for FreightRatesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(load_port) = self.load_port {
            url.query_pairs_mut()
                .append_pair("LoadPort", &load_port.to_string());
        }
        if !self.discharge_ports.is_empty() {
            url.query_pairs_mut().append_pair(
                "DischargePorts",
                &join_repeated("DischargePorts", &self.discharge_ports),
            );
        }
        if let Some(vessel_class_id) = self.vessel_class_id {
            url.query_pairs_mut()
                .append_pair("VesselClassId", &vessel_class_id.to_string());
        }
        url.query_pairs_mut()
            .append_pair("VesselSubclass", self.vessel_subclass.as_str());
        if let Some(date) = self.date {
            url.query_pairs_mut().append_pair("Date", &format_date(date));
        }
        url
    }
}
