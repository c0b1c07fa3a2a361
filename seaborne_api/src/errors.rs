//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// A not-found status on a single-entity lookup is not an error: those
/// operations return `Ok(None)` instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the response body could not be read.
    #[error("Transport failure")]
    Transport,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16, body: String },
    /// The API returned a success status but the body is not JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
    /// The body is JSON but a field could not be coerced into its record type.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while mapping a decoded JSON document onto a record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text that should hold a decimal number does not.
    #[error("invalid decimal value {0:?}")]
    InvalidDecimal(String),
    /// Text that should hold an ISO-8601 date or date-time does not.
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
    /// A field holds a JSON value of the wrong kind.
    #[error("field `{field}` should be {expected}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },
}

impl ParseError {
    pub(crate) fn unexpected(field: &str, expected: &'static str) -> Self {
        Self::UnexpectedType {
            field: field.to_string(),
            expected,
        }
    }
}
