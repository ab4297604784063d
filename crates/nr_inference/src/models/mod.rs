use std::sync::Arc;
use nr_core::{Error, Result, SentimentClassifier, Summarizer};
use crate::Config;

pub mod dummy;
pub mod huggingface;

pub use dummy::DummyModel;
pub use huggingface::HuggingFaceModel;

/// The two model ports used by the scoring pipeline.
#[derive(Clone)]
pub struct Models {
    pub summarizer: Arc<dyn Summarizer>,
    pub sentiment: Arc<dyn SentimentClassifier>,
}

impl Models {
    /// Uses one model instance for both summarization and sentiment.
    pub fn shared<M>(model: Arc<M>) -> Self
    where
        M: Summarizer + SentimentClassifier + 'static,
    {
        Self {
            summarizer: model.clone(),
            sentiment: model,
        }
    }

    pub fn name(&self) -> &str {
        self.summarizer.name()
    }
}

pub async fn create_model(config: Option<Config>) -> Result<Models> {
    let config = config.unwrap_or_default();
    match config.model_name.as_deref().unwrap_or("dummy") {
        "dummy" => Ok(Models::shared(Arc::new(DummyModel::new(Some(config)).await?))),
        "huggingface" | "hf" => Ok(Models::shared(Arc::new(HuggingFaceModel::new(&config)?))),
        other => Err(Error::Inference(format!(
            "Unknown model: {}. Available models: dummy, huggingface",
            other
        ))),
    }
}
