use async_trait::async_trait;
use crate::types::{LengthBounds, SentimentLabel};
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Model name, for logs
    fn name(&self) -> &str;

    /// Summarize `text` within the given length bounds
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String>;
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify the overall sentiment of `text`
    async fn classify(&self, text: &str) -> Result<SentimentLabel>;
}
