use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid summary type provided: {0}")]
    InvalidSummaryType(String),

    #[error("Invalid summary type provided: no summary produced for {url}")]
    EmptySummary { url: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures of a network collaborator (fetcher, models, search).
    /// A batch skips the affected article instead of aborting on these.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Error::Fetch(_)
                | Error::Inference(_)
                | Error::Search(_)
                | Error::Timeout { .. }
                | Error::Http(_)
        )
    }

    /// True for errors caused by the caller's input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSummaryType(_)
                | Error::EmptySummary { .. }
                | Error::MissingField(_)
                | Error::InvalidDateRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
