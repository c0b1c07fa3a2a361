mod common;
pub use self::common::{format_date, join_commas, join_repeated, BoolFormat, NoQuery, Query};

mod freight_pricing;
pub use self::freight_pricing::FreightPricingQuery;

mod freight_rates;
pub use self::freight_rates::FreightRatesQuery;

mod market_rates;
pub use self::market_rates::{MarketRatesQuery, RoutesQuery};

mod valuations;
pub use self::valuations::{LatestValuationsQuery, ValuationDateQuery};
