//! Store REST client
//!
//! Thin reqwest wrapper around the store's `/rest/v1/{table}` read surface.
//! Credentials come in through [`StoreConfig`]; the anon key is attached to
//! every request as both the `apikey` header and a bearer token.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

use super::query::TableQuery;
use super::StoreError;
use crate::config::StoreConfig;

/// A single record returned by a table read, keyed by column name
pub type Row = Map<String, Value>;

/// Read-only client for the hosted data store
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new store client from configuration
    ///
    /// Fails with [`StoreError::NotConfigured`] when the URL or anon key is
    /// missing so callers can degrade instead of panicking.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(StoreError::NotConfigured)?;
        let anon_key = config
            .anon_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(StoreError::NotConfigured)?;

        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(anon_key)
            .map_err(|e| StoreError::InvalidKey(e.to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", anon_key))
            .map_err(|e| StoreError::InvalidKey(e.to_string()))?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
        })
    }

    /// Start a read query against a table
    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery::new(
            &self.client,
            format!("{}/rest/v1/{}", self.base_url, name),
        )
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
