//! Record Store client
//!
//! The Record Store is a hosted table store reached over a PostgREST-style
//! REST API. This client covers the two operations the backend needs:
//! inserting one row and listing a table ordered by creation time.
//!
//! One client is created at startup and shared across handlers; it is
//! never instantiated per request.

pub mod models;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Error, Result};

/// Bound on any single request to the Record Store. A timeout surfaces
/// as a failure result, never as a hung handler.
const STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the hosted Record Store
#[derive(Debug, Clone)]
pub struct RecordStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RecordStore {
    /// Create a client for the store at `base_url` authenticated by `api_key`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("Record store URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(STORE_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Insert exactly one row into `table`.
    ///
    /// Returns the inserted row(s) as reported by the store
    /// (`Prefer: return=representation`). The store assigns `id` and
    /// `created_at`; the caller never supplies them.
    pub async fn insert_one<T, R>(&self, table: &str, row: &T) -> Result<Vec<R>>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.table_url(table);
        tracing::debug!(table = %table, url = %url, "Inserting row into record store");

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::StoreRejected(status.as_u16(), detail));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    /// Fetch all rows of `table`, ordered by `order_column` descending.
    ///
    /// No filtering or paging; the read-only surface shows every row.
    pub async fn list_desc<R>(&self, table: &str, order_column: &str) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        let url = format!(
            "{}?select=*&order={}.desc",
            self.table_url(table),
            order_column
        );
        tracing::debug!(table = %table, url = %url, "Listing record store table");

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::StoreRejected(status.as_u16(), detail));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }
}
