//! Records API transport: raw page retrieval without status interpretation.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{PageQuery, LINK_HEADER};
use tracing::debug;

/// Unparsed response to a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub status: u16,
    pub link: Option<String>,
    pub body: Vec<u8>,
}

impl RawPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// Performs `GET <base>?_page=<page>&_limit=<limit>`.
    ///
    /// Errors only when no response arrived at all; HTTP error statuses are
    /// returned as a `RawPage` for the caller to judge.
    async fn get_page(&self, query: PageQuery) -> Result<RawPage>;
}

pub struct HttpRecordsApi {
    http: Client,
    base_url: String,
}

impl HttpRecordsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecordsApi for HttpRecordsApi {
    async fn get_page(&self, query: PageQuery) -> Result<RawPage> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let link = response
            .headers()
            .get(LINK_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?.to_vec();

        debug!(
            page = query.page,
            limit = query.limit,
            status,
            bytes = body.len(),
            "records api: page response received"
        );

        Ok(RawPage { status, link, body })
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
