//! ApiClient - GET requests against the `objects` envelope APIs.
//!
//! Both the Mozillians and the Reps APIs answer list queries with
//! `{"meta": {...}, "objects": [...]}`. The client only ever cares about the
//! first object.

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use woodstock_core::WoodstockError;
use woodstock_core::config::SyncConfig;
use woodstock_core::error::Result;
use woodstock_core::lookup::LookupOutcome;

/// What a single query produced.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// First element of a non-empty `objects` list.
    Found(serde_json::Value),
    /// `objects` was empty, or its first element carried no data (`{}` or
    /// `null`).
    Empty,
    /// The API answered with something other than 200.
    Failed(StatusCode),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    objects: Vec<serde_json::Value>,
}

/// Thin wrapper over a `reqwest::Client` with a fixed timeout.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("woodstock/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WoodstockError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Creates a client using `request_timeout_secs` from the configuration.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Self::new(Duration::from_secs(config.request_timeout_secs))
    }

    /// Issues a GET against a fully-formed URL.
    ///
    /// A non-200 status is logged at error level and reported as
    /// `QueryOutcome::Failed`; it is not an `Err`. Transport failures and
    /// bodies without an `objects` list are.
    pub async fn query(&self, url: &Url) -> Result<QueryOutcome> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("Response status: {}", status.as_u16());
            return Ok(QueryOutcome::Failed(status));
        }

        let envelope: Envelope = response.json().await?;
        Ok(envelope
            .objects
            .into_iter()
            .next()
            .filter(has_data)
            .map(QueryOutcome::Found)
            .unwrap_or(QueryOutcome::Empty))
    }

    /// Like [`query`](Self::query) but decodes the found object into `T` and
    /// folds both kinds of miss into `LookupOutcome::NotFound`.
    pub async fn query_as<T>(&self, url: &Url) -> Result<LookupOutcome<T>>
    where
        T: DeserializeOwned,
    {
        match self.query(url).await? {
            QueryOutcome::Found(value) => Ok(LookupOutcome::Found(serde_json::from_value(value)?)),
            QueryOutcome::Empty | QueryOutcome::Failed(_) => Ok(LookupOutcome::NotFound),
        }
    }
}

fn has_data(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Object(fields) => !fields.is_empty(),
        _ => true,
    }
}

/// Appends `params` to `base`, keeping any query string `base` already has.
pub(crate) fn build_url(base: &str, params: &[(&str, &str)]) -> Result<Url> {
    Url::parse_with_params(base, params)
        .map_err(|e| WoodstockError::config(format!("Invalid API URL '{}': {}", base, e)))
}
