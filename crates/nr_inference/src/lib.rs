use std::fmt;
use std::time::Duration;

pub mod models;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Config {
    /// `dummy` or `huggingface`
    pub model_name: Option<String>,
    /// Base URL of an inference API serving `/{model id}` endpoints
    pub model_url: Option<String>,
    pub api_key: Option<String>,
    pub summarization_model: Option<String>,
    pub sentiment_model: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("model_name", &self.model_name)
            .field("model_url", &self.model_url)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("summarization_model", &self.summarization_model)
            .field("sentiment_model", &self.sentiment_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: None,
            model_url: None,
            api_key: None,
            summarization_model: None,
            sentiment_model: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::models::{create_model, Models};
    pub use super::Config;
    pub use nr_core::{Error, Result, SentimentClassifier, Summarizer};
}

pub use models::{create_model, Models};
