use async_trait::async_trait;
use nr_core::{Error, PageText, Result, TextFetcher};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::page::extract_page;

pub const USER_AGENT: &str = concat!("newsrank/", env!("CARGO_PKG_VERSION"));

/// Downloads article pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageText> {
        let parsed = Url::parse(url).map_err(|e| Error::Fetch(format!("invalid URL {}: {}", url, e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned {}", url, status)));
        }
        let html = response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))?;
        debug!(url = %url, bytes = html.len(), "Fetched page");

        Ok(extract_page(&html))
    }
}
