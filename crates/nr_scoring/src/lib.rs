//! Article relevance scoring.
//!
//! The leaf scorers (`date`, `authority`, `keywords`, `sentiment`) are pure
//! functions. [`ArticleScorer`] combines them into an [`nr_core::ArticleRecord`],
//! [`aggregate`] folds records into per-month totals and [`ScoringPipeline`]
//! drives the external collaborators for a whole batch of URLs.

pub mod aggregate;
pub mod authority;
pub mod date;
pub mod keywords;
pub mod pipeline;
pub mod scorer;
pub mod sentiment;

pub use aggregate::aggregate;
pub use authority::AuthorityTier;
pub use pipeline::{PipelineConfig, ScoreBatch, ScoringPipeline, DEFAULT_SEARCH_RESULT_CAP};
pub use scorer::{ArticleInput, ArticleScorer};

pub mod prelude {
    pub use super::{PipelineConfig, ScoreBatch, ScoringPipeline};
    pub use nr_core::{Error, Result, ScoreReport, SummaryRequest};
}
