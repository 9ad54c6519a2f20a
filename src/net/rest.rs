//! REST record controller.
//!
//! One controller per bound table, all sharing one `reqwest::Client`. Thin
//! HTTP wrappers around the four backend verbs; the row transform lives in
//! [`parse_rows`](super::types::parse_rows) for testability.

use std::time::Duration;

use crate::error::GridError;

use super::config::{ClientConfig, ZeroFilterPolicy};
use super::filter;
use super::types::{parse_rows, RecordController, Row};

#[derive(Debug)]
pub struct RestController {
    http: reqwest::Client,
    url: String,
    zero_filter: ZeroFilterPolicy,
}

impl RestController {
    /// Controller for one table, with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::HttpClientBuild`] if the client cannot be built.
    pub fn new(config: &ClientConfig, table_url: &str) -> Result<Self, GridError> {
        let http = build_http_client(config)?;
        Ok(Self::with_client(http, config, table_url))
    }

    /// Controller reusing an already-built client (the binder shares one
    /// across all bound tables).
    pub(crate) fn with_client(http: reqwest::Client, config: &ClientConfig, table_url: &str) -> Self {
        Self {
            http,
            url: format!("{}{}", config.base_url, table_url),
            zero_filter: config.zero_filter,
        }
    }

    /// The collection endpoint this controller talks to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Item endpoint by direct concatenation; the collection URL keeps its
    /// trailing slash, so no separator is inserted.
    fn item_url(&self, item: &Row) -> String {
        let id = item.get("id").map(filter::stringify).unwrap_or_default();
        format!("{}{}", self.url, id)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, GridError> {
        let response = request.send().await.map_err(|e| GridError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| GridError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(GridError::Backend { status, body });
        }
        Ok(body)
    }
}

pub(crate) fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, GridError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .build()
        .map_err(|e| GridError::HttpClientBuild(e.to_string()))
}

/// Mutation responses pass through unvalidated; an empty body becomes null.
fn decode_body(body: &str) -> Result<serde_json::Value, GridError> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(body).map_err(|e| GridError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl RecordController for RestController {
    async fn load_data(&self, filter: &Row) -> Result<Vec<Row>, GridError> {
        let params = filter::filter_params(filter, self.zero_filter);
        tracing::debug!(url = %self.url, ?params, "loading rows");

        let body = self.send(self.http.get(&self.url).query(&params)).await?;
        parse_rows(&body)
    }

    async fn insert_item(&self, item: &Row) -> Result<serde_json::Value, GridError> {
        let body = self.send(self.http.post(&self.url).json(item)).await?;
        decode_body(&body)
    }

    async fn update_item(&self, item: &Row) -> Result<serde_json::Value, GridError> {
        let url = self.item_url(item);
        let body = self.send(self.http.put(&url).json(item)).await?;
        decode_body(&body)
    }

    async fn delete_item(&self, item: &Row) -> Result<(), GridError> {
        let url = self.item_url(item);
        self.send(self.http.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
