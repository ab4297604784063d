use futures::stream::{self, StreamExt};
use nr_core::{
    ArticleRecord, DateRangeQuery, Error, LengthBounds, PeriodTotals, Result, ScoreReport,
    SearchProvider, SentimentClassifier, SkippedArticle, SummaryRequest, Summarizer, TextFetcher,
};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::aggregate::aggregate;
use crate::scorer::{ArticleInput, ArticleScorer};

pub const DEFAULT_SEARCH_RESULT_CAP: usize = 50;
pub const SEARCH_LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Articles processed at the same time. 1 processes URLs strictly in sequence.
    pub max_concurrency: usize,
    /// Upper bound for every fetch, summarize, classify and search call.
    pub collaborator_timeout: Duration,
    pub search_result_cap: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            collaborator_timeout: Duration::from_secs(30),
            search_result_cap: DEFAULT_SEARCH_RESULT_CAP,
        }
    }
}

/// Scored articles of one request, in input URL order.
#[derive(Debug, Clone, Default)]
pub struct ScoreBatch {
    pub records: Vec<ArticleRecord>,
    pub skipped: Vec<SkippedArticle>,
}

impl ScoreBatch {
    pub fn totals(&self) -> PeriodTotals {
        aggregate(&self.records)
    }

    pub fn into_report(self) -> ScoreReport {
        let totals = self.totals();
        ScoreReport::new(&self.records, &totals, self.skipped)
    }
}

pub struct ScoringPipeline {
    fetcher: Arc<dyn TextFetcher>,
    summarizer: Arc<dyn Summarizer>,
    sentiment: Arc<dyn SentimentClassifier>,
    search: Arc<dyn SearchProvider>,
    config: PipelineConfig,
}

impl fmt::Debug for ScoringPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringPipeline")
            .field("fetcher", &"<dyn TextFetcher>")
            .field("summarizer", &self.summarizer.name())
            .field("sentiment", &"<dyn SentimentClassifier>")
            .field("search", &"<dyn SearchProvider>")
            .field("config", &self.config)
            .finish()
    }
}

impl ScoringPipeline {
    pub fn new(
        fetcher: Arc<dyn TextFetcher>,
        summarizer: Arc<dyn Summarizer>,
        sentiment: Arc<dyn SentimentClassifier>,
        search: Arc<dyn SearchProvider>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
            sentiment,
            search,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    async fn with_timeout<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let after = self.config.collaborator_timeout;
        tokio::time::timeout(after, fut)
            .await
            .map_err(|_| Error::Timeout { operation, after })?
    }

    async fn score_article(
        &self,
        url: &str,
        scorer: &ArticleScorer,
        bounds: LengthBounds,
    ) -> Result<ArticleRecord> {
        let page = self.with_timeout("fetch", self.fetcher.fetch(url)).await?;
        let summary = self
            .with_timeout("summarize", self.summarizer.summarize(&page.paragraphs, bounds))
            .await?;
        if summary.trim().is_empty() {
            return Err(Error::EmptySummary { url: url.to_string() });
        }
        let label = self.with_timeout("classify", self.sentiment.classify(&summary)).await?;

        scorer.score(ArticleInput {
            url,
            summary: &summary,
            sentiment: &label,
            page: &page,
        })
    }

    /// Scores every URL of the request.
    ///
    /// A collaborator failure on one URL skips that article and records it in
    /// [`ScoreBatch::skipped`]. Any other error (an empty summary) aborts the
    /// whole batch and drops the articles still in flight.
    pub async fn score_urls(&self, request: &SummaryRequest) -> Result<ScoreBatch> {
        let scorer = ArticleScorer::new(request.keywords.clone());
        let bounds = request.summary_type.bounds();
        info!(
            urls = request.urls.len(),
            summary_type = %request.summary_type,
            keywords = ?request.keywords,
            "📰 Scoring articles"
        );

        let scorer = &scorer;
        let outcomes = stream::iter(request.urls.iter().cloned())
            .map(move |url| async move {
                let result = self.score_article(&url, scorer, bounds).await;
                (url, result)
            })
            .buffered(self.config.max_concurrency.max(1));
        futures::pin_mut!(outcomes);

        let mut batch = ScoreBatch::default();
        while let Some((url, result)) = outcomes.next().await {
            match result {
                Ok(record) => batch.records.push(record),
                Err(e) if e.is_collaborator_failure() => {
                    warn!(url = %url, error = %e, "⚠️ Skipping article");
                    batch.skipped.push(SkippedArticle {
                        url,
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "❌ Aborting batch");
                    return Err(e);
                }
            }
        }

        info!(
            scored = batch.records.len(),
            skipped = batch.skipped.len(),
            "✅ Batch scored"
        );
        Ok(batch)
    }

    /// Searches for articles in the date range, then scores the results.
    pub async fn score_date_range(&self, query: &DateRangeQuery) -> Result<ScoreBatch> {
        let search_query = query.search_query();
        let cap = self.config.search_result_cap;
        info!(query = %search_query, cap, "🔍 Searching for articles");

        let mut urls = self
            .with_timeout("search", self.search.search(&search_query, cap, SEARCH_LANGUAGE))
            .await?;
        urls.truncate(cap);
        info!(count = urls.len(), "🔍 Search returned candidates");

        let request = SummaryRequest {
            urls,
            summary_type: query.summary_type,
            keywords: query.keywords.clone(),
        };
        self.score_urls(&request).await
    }
}
