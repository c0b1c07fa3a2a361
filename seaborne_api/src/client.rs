//! HTTP transport shared by every API.

use std::fmt;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{query::Query, Error};

/// Production host of the maritime data APIs.
pub const DEFAULT_HOST: &str = "https://api.seaborne.example";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated connection to the maritime data APIs.
///
/// Holds the API key, the host every relative path is resolved against, and
/// a pooled `reqwest::Client` with a 30-second timeout. Cloning is cheap and
/// clones share the pool.
#[derive(Clone)]
pub struct Connection {
    client: reqwest::Client,
    api_key: String,
    host: String,
}

impl Connection {
    /// Creates a connection to the production host.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_host(DEFAULT_HOST, api_key)
    }

    /// Creates a connection to a custom host. Used for testing with wiremock.
    pub fn with_host(host: &str, api_key: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport
            })?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            host: host.trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let raw = format!("{}/{}", self.host, path.trim_start_matches('/'));
        let url = Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", raw, e);
            Error::Transport
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Sends a GET request and returns the raw response, whatever its status.
    pub async fn get<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Response, Error> {
        let url = self.get_url(path, query)?;
        let resp = self
            .client
            .get(url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", url, e);
                Error::Transport
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::Transport
        })?;
        tracing::debug!("GET {} -> {}", url.path(), status);

        Ok(Response { status, body })
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON without looking at the status.
    pub fn json(&self) -> Result<Value, Error> {
        serde_json::from_str(&self.body).map_err(|e| {
            let snippet = truncate_body(&self.body);
            tracing::error!("Failed to decode JSON: {} | body: {}", e, snippet);
            Error::InvalidJson(e.to_string())
        })
    }

    /// Returns the decoded body of a successful response, or
    /// [`Error::RequestFailed`] for any other status.
    pub(crate) fn into_json(self) -> Result<Value, Error> {
        if !self.is_success() {
            let snippet = truncate_body(&self.body);
            tracing::error!("Request failed with status {}: {}", self.status, snippet);
            return Err(Error::RequestFailed {
                status: self.status,
                body: snippet,
            });
        }
        self.json()
    }

    /// Like [`Response::into_json`], but a not-found status is `Ok(None)`.
    pub(crate) fn into_optional_json(self) -> Result<Option<Value>, Error> {
        if self.is_not_found() {
            return Ok(None);
        }
        self.into_json().map(Some)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
