use std::fmt;
use nr_core::{LengthBounds, Result, SentimentClassifier, SentimentLabel, Summarizer};
use crate::Config;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "gain", "gains", "growth", "success", "successful", "improve",
    "improved", "improves", "strong", "win", "wins", "boost", "benefit", "benefits",
    "positive", "record", "breakthrough", "recovery",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "loss", "losses", "decline", "declines", "crisis", "fail", "fails",
    "failure", "weak", "drop", "drops", "risk", "risks", "war", "death", "deaths",
    "negative", "collapse", "fraud",
];

/// Offline model: extractive summaries and a word-list sentiment.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub async fn new(_config: Option<Config>) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait::async_trait]
impl Summarizer for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String> {
        // First `max` words; `min` is not enforced
        let words: Vec<&str> = text.split_whitespace().take(bounds.max).collect();
        Ok(words.join(" "))
    }
}

#[async_trait::async_trait]
impl SentimentClassifier for DummyModel {
    async fn classify(&self, text: &str) -> Result<SentimentLabel> {
        let (mut positive, mut negative) = (0usize, 0usize);
        for word in text.split_whitespace() {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }

        Ok(match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        })
    }
}
