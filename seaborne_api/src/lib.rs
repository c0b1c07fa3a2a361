//! Typed client for maritime data REST APIs: freight pricing, freight rates,
//! geography, market rates and vessel valuations.
//!
//! Each API struct wraps a shared [`Connection`]. Responses are decoded into
//! immutable records by the pure parsers in [`parse`]; prices keep the exact
//! decimal precision the server sent.

mod api;
mod client;
pub mod coerce;
mod errors;
pub mod filter;
mod json;
pub mod parse;
mod query;
pub mod types;
pub use self::api::{FreightPricingApi, FreightRatesApi, GeoApi, MarketRatesApi, VesselValuationsApi};
pub use self::client::{Connection, Response, DEFAULT_HOST};
pub use self::errors::{Error, ParseError};
pub use self::query::{
    format_date, join_commas, join_repeated, BoolFormat, FreightPricingQuery, FreightRatesQuery,
    LatestValuationsQuery, MarketRatesQuery, NoQuery, Query, RoutesQuery, ValuationDateQuery,
};
