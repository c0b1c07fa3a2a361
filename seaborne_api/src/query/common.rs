//! Shared query infrastructure: the [`Query`] trait and the formatting
//! conventions the remote endpoints expect.

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query for endpoints that take no parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoQuery;

impl Query for NoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}

/// How an endpoint wants booleans spelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolFormat {
    /// `True` / `False`
    Literal,
    /// `1` / `0`
    Numeric,
}

impl BoolFormat {
    pub fn format(self, value: bool) -> &'static str {
        match (self, value) {
            (BoolFormat::Literal, true) => "True",
            (BoolFormat::Literal, false) => "False",
            (BoolFormat::Numeric, true) => "1",
            (BoolFormat::Numeric, false) => "0",
        }
    }
}

/// Formats a date as an ISO-8601 calendar date.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Joins values the way endpoints expecting repeated keys want them:
/// `["a", "b", "c"]` under `Key` becomes `a&Key=b&Key=c`.
///
/// The result is sent as the value of a single `Key` parameter.
pub fn join_repeated<T: ToString>(key: &str, values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&format!("&{}=", key))
}

/// Joins values with commas, e.g. `1,2,3`.
pub fn join_commas<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
