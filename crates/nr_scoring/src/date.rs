//! Publication period detection.
//!
//! Looks for the first `<Month> <day>, <year>` date in a piece of page text,
//! e.g. `March 5, 2023` or `Mar 5, 2023`, and reduces it to a [`Period`].

use lazy_static::lazy_static;
use nr_core::{PageText, Period};
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"(?i)\b([a-z]{3,9})\s(0?[1-9]|[12][0-9]|3[01]),\s([0-9]{4})")
            .expect("date pattern is valid");
}

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    #[error("unrecognized month token: {0}")]
    UnrecognizedMonth(String),

    #[error("invalid year: {0}")]
    InvalidYear(String),
}

/// Maps an English month name or its three-letter abbreviation to 1..=12.
pub fn month_number(token: &str) -> Result<u8, DateError> {
    let lower = token.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|name| lower == *name || lower == name[..3] || (lower == "sept" && *name == "september"))
        .map(|index| index as u8 + 1)
        .ok_or_else(|| DateError::UnrecognizedMonth(token.to_string()))
}

fn first_date(text: &str) -> Result<Option<Period>, DateError> {
    let Some(captures) = DATE_PATTERN.captures(text) else {
        return Ok(None);
    };
    let month = month_number(&captures[1])?;
    let year = captures[3]
        .parse::<u16>()
        .map_err(|_| DateError::InvalidYear(captures[3].to_string()))?;
    Ok(Period::new(year, month))
}

/// First date in `text`, as a period. A match whose month token is not a
/// month (`Chapter 3, 2023`) yields `None`; later matches are not considered.
pub fn extract_period(text: &str) -> Option<Period> {
    match first_date(text) {
        Ok(period) => period,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed date match");
            None
        }
    }
}

/// Searches the page body first and falls back to the header.
pub fn extract_period_from_page(page: &PageText) -> Option<Period> {
    extract_period(&page.body).or_else(|| page.header.as_deref().and_then(extract_period))
}
