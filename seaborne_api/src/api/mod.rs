//! Endpoint callers, one struct per remote service.

mod freight_pricing;
pub use self::freight_pricing::FreightPricingApi;

mod freight_rates;
pub use self::freight_rates::FreightRatesApi;

mod geo;
pub use self::geo::GeoApi;

mod market_rates;
pub use self::market_rates::MarketRatesApi;

mod valuations;
pub use self::valuations::VesselValuationsApi;
