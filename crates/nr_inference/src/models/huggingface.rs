use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use nr_core::{Error, LengthBounds, Result, SentimentClassifier, SentimentLabel, Summarizer};
use std::fmt;
use crate::Config;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
    options: RequestOptions,
}

#[derive(Serialize)]
struct SummarizationParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    options: RequestOptions,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn top_label(self) -> Option<LabelScore> {
        let scores = match self {
            ClassificationResponse::Nested(batches) => batches.into_iter().next()?,
            ClassificationResponse::Flat(scores) => scores,
        };
        scores.into_iter().max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

/// Client for the Hugging Face inference API (or a server speaking its format).
pub struct HuggingFaceModel {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    summarization_model: String,
    sentiment_model: String,
}

impl HuggingFaceModel {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config
                .model_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            summarization_model: config
                .summarization_model
                .clone()
                .unwrap_or_else(|| DEFAULT_SUMMARIZATION_MODEL.to_string()),
            sentiment_model: config
                .sentiment_model
                .clone()
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string()),
        })
    }

    async fn post<B: Serialize + ?Sized>(&self, model: &str, body: &B) -> Result<reqwest::Response> {
        let mut request = self
            .client
            .post(format!("{}/{}", self.base_url, model))
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "{} returned {}: {}",
                model,
                status,
                body.trim()
            )));
        }
        Ok(response)
    }
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("summarization_model", &self.summarization_model)
            .field("sentiment_model", &self.sentiment_model)
            .finish()
    }
}

#[async_trait]
impl Summarizer for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                min_length: bounds.min,
                max_length: bounds.max,
                do_sample: false,
            },
            options: RequestOptions { wait_for_model: true },
        };

        let outputs = self
            .post(&self.summarization_model, &request)
            .await?
            .json::<Vec<SummaryOutput>>()
            .await?;
        let summary = outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .ok_or_else(|| Error::Inference("summarization returned no output".to_string()))?;

        tracing::debug!(model = %self.summarization_model, chars = summary.len(), "Generated summary");
        Ok(summary)
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceModel {
    async fn classify(&self, text: &str) -> Result<SentimentLabel> {
        let request = ClassificationRequest {
            inputs: text,
            options: RequestOptions { wait_for_model: true },
        };

        let response = self
            .post(&self.sentiment_model, &request)
            .await?
            .json::<ClassificationResponse>()
            .await?;
        let top = response
            .top_label()
            .ok_or_else(|| Error::Inference("sentiment returned no labels".to_string()))?;

        tracing::debug!(model = %self.sentiment_model, label = %top.label, score = top.score, "Classified sentiment");
        Ok(SentimentLabel::from(top.label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn model_for(server: &MockServer, api_key: Option<&str>) -> HuggingFaceModel {
        HuggingFaceModel::new(&Config {
            model_name: Some("huggingface".to_string()),
            model_url: Some(format!("{}/models/", server.uri())),
            api_key: api_key.map(str::to_string),
            summarization_model: Some("summ".to_string()),
            sentiment_model: Some("sent".to_string()),
            ..Config::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_sends_bounds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/summ"))
            .and(header("authorization", "Bearer hf_test"))
            .and(body_partial_json(json!({
                "inputs": "long article text",
                "parameters": { "min_length": 10, "max_length": 40, "do_sample": false }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "summary_text": "Short headline." }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let model = model_for(&server, Some("hf_test"));
        let summary = model
            .summarize("long article text", LengthBounds { min: 10, max: 40 })
            .await
            .unwrap();
        assert_eq!(summary, "Short headline.");
    }

    #[tokio::test]
    async fn test_summarize_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/summ"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let model = model_for(&server, None);
        let err = model
            .summarize("text", LengthBounds { min: 10, max: 40 })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Inference(ref msg) if msg.contains("503")));
        assert!(err.is_collaborator_failure());
    }

    #[tokio::test]
    async fn test_classify_nested_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/sent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
                { "label": "NEGATIVE", "score": 0.02 },
                { "label": "POSITIVE", "score": 0.98 }
            ]])))
            .mount(&server)
            .await;

        let model = model_for(&server, None);
        assert_eq!(model.classify("great news").await.unwrap(), SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn test_classify_flat_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/sent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "NEGATIVE", "score": 0.91 },
                { "label": "POSITIVE", "score": 0.09 }
            ])))
            .mount(&server)
            .await;

        let model = model_for(&server, None);
        assert_eq!(model.classify("awful news").await.unwrap(), SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn test_classify_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/sent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[]])))
            .mount(&server)
            .await;

        let model = model_for(&server, None);
        assert!(matches!(model.classify("text").await, Err(Error::Inference(_))));
    }
}
