use async_trait::async_trait;
use crate::types::PageText;
use crate::Result;

#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetch a page and extract its text regions
    async fn fetch(&self, url: &str) -> Result<PageText>;
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return at most `cap` result URLs for `query`
    async fn search(&self, query: &str, cap: usize, language: &str) -> Result<Vec<String>>;
}
