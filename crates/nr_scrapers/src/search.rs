//! Web search through a SearXNG instance's JSON API.

use async_trait::async_trait;
use nr_core::{Error, Result, SearchProvider};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::fetcher::USER_AGENT;

/// Stop paging after this many result pages even if the cap is not reached.
const MAX_PAGES: usize = 10;

#[derive(Deserialize)]
struct SearxResponse {
    #[serde(default)]
    results: Vec<SearxResult>,
}

#[derive(Deserialize)]
struct SearxResult {
    url: String,
}

#[derive(Debug, Clone)]
pub struct SearxSearch {
    client: Client,
    endpoint: Url,
}

impl SearxSearch {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let endpoint = Url::parse(&base)
            .and_then(|base| base.join("search"))
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    async fn page(&self, query: &str, language: &str, page: usize) -> Result<Vec<String>> {
        let page = page.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", query),
                ("format", "json"),
                ("language", language),
                ("pageno", page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Search(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Search(format!("search returned {}", status)));
        }
        let body = response
            .json::<SearxResponse>()
            .await
            .map_err(|e| Error::Search(format!("invalid search response: {}", e)))?;
        Ok(body.results.into_iter().map(|r| r.url).collect())
    }
}

#[async_trait]
impl SearchProvider for SearxSearch {
    async fn search(&self, query: &str, cap: usize, language: &str) -> Result<Vec<String>> {
        let mut urls: Vec<String> = Vec::new();
        for page in 1..=MAX_PAGES {
            if urls.len() >= cap {
                break;
            }
            let before = urls.len();
            for url in self.page(query, language, page).await? {
                if urls.len() >= cap {
                    break;
                }
                if !urls.contains(&url) {
                    urls.push(url);
                }
            }
            debug!(page, found = urls.len() - before, "Fetched search page");
            if urls.len() == before {
                break;
            }
        }
        Ok(urls)
    }
}
