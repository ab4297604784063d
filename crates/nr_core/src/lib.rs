pub mod error;
pub mod models;
pub mod report;
pub mod sources;
pub mod types;

pub use error::{Error, Result};
pub use models::{SentimentClassifier, Summarizer};
pub use report::{round2, ArticleReport, ScoreReport, SkippedArticle};
pub use sources::{SearchProvider, TextFetcher};
pub use types::{
    normalize_keywords, ArticleRecord, DateRangeQuery, LengthBounds, PageText, Period,
    PeriodTotals, SentimentLabel, SummaryRequest, SummaryType,
};
