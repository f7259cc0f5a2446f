//! MozilliansClient - lookups against the mozillians.org directory API (v1).
//!
//! Every request carries the application credentials and the result limit:
//! `?app_name=..&app_key=..&limit=200&email=..` (or `&username=..`).

use async_trait::async_trait;
use reqwest::Url;

use woodstock_core::config::SyncConfig;
use woodstock_core::error::Result;
use woodstock_core::lookup::{DirectoryLookup, DirectoryRecord, LookupOutcome};

use crate::api_client::{ApiClient, build_url};

/// Directory client for the Mozillians API.
#[derive(Clone)]
pub struct MozilliansClient {
    api: ApiClient,
    api_url: String,
    app_name: String,
    app_key: String,
    limit: String,
}

impl MozilliansClient {
    /// Creates a client from explicit configuration.
    ///
    /// Fails with a `Config` error when the endpoint or credentials are missing.
    pub fn new(api: ApiClient, config: &SyncConfig) -> Result<Self> {
        config.validate_mozillians()?;

        Ok(Self {
            api,
            api_url: config.mozillians_api_url.clone(),
            app_name: config.mozillians_app_name.clone(),
            app_key: config.mozillians_app_key.clone(),
            limit: config.results_limit.to_string(),
        })
    }

    /// Builds the lookup-by-email URL.
    pub fn email_url(&self, email: &str) -> Result<Url> {
        self.lookup_url("email", email)
    }

    /// Builds the lookup-by-username URL.
    pub fn username_url(&self, username: &str) -> Result<Url> {
        self.lookup_url("username", username)
    }

    fn lookup_url(&self, key: &str, value: &str) -> Result<Url> {
        build_url(
            &self.api_url,
            &[
                ("app_name", self.app_name.as_str()),
                ("app_key", self.app_key.as_str()),
                ("limit", self.limit.as_str()),
                (key, value),
            ],
        )
    }
}

#[async_trait]
impl DirectoryLookup for MozilliansClient {
    async fn find_by_email(&self, email: &str) -> Result<LookupOutcome<DirectoryRecord>> {
        let url = self.email_url(email)?;
        self.api.query_as(&url).await
    }

    async fn find_by_username(&self, username: &str) -> Result<LookupOutcome<DirectoryRecord>> {
        let url = self.username_url(username)?;
        self.api.query_as(&url).await
    }
}
