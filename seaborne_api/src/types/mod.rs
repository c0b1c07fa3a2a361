pub mod freight_pricing;
pub mod freight_rates;
pub mod geo;
pub mod market_rates;
pub mod valuations;

pub use self::freight_pricing::{Costs, FreightPricing, Totals, VesselType, VESSEL_TYPES};
pub use self::freight_rates::{FreightCosts, FreightRatesPricing, FreightTotals, VesselSubclass};
pub use self::geo::{Area, Country, GeoAsset, Port};
pub use self::market_rates::{MarketRate, Route, VesselClass};
pub use self::valuations::Valuation;
