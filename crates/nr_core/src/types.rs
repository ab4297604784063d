use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A year-month bucket, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: u16,
    month: u8,
}

impl Period {
    pub fn new(year: u16, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got {:?}", s))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(format!("expected YYYY-MM, got {:?}", s));
        }
        let year = year.parse::<u16>().map_err(|e| format!("invalid year in {:?}: {}", s, e))?;
        let month = month.parse::<u8>().map_err(|e| format!("invalid month in {:?}: {}", s, e))?;
        Period::new(year, month).ok_or_else(|| format!("month out of range in {:?}", s))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Summed weighted score per period.
pub type PeriodTotals = BTreeMap<Period, f64>;

/// Summary length bounds handed to the summarizer, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryType {
    SynopsisPage,
    SynopsisParagraph,
    #[default]
    Headline,
}

impl SummaryType {
    pub fn bounds(&self) -> LengthBounds {
        match self {
            SummaryType::SynopsisPage => LengthBounds { min: 200, max: 600 },
            SummaryType::SynopsisParagraph => LengthBounds { min: 50, max: 150 },
            SummaryType::Headline => LengthBounds { min: 10, max: 40 },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::SynopsisPage => "synopsis-page",
            SummaryType::SynopsisParagraph => "synopsis-paragraph",
            SummaryType::Headline => "headline",
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryType {
    type Err = Error;

    /// Accepts the kebab names and the labels shown in the web form.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "synopsis-page" | "one-page synopsis" => Ok(SummaryType::SynopsisPage),
            "synopsis-paragraph" | "one paragraph synopsis" => Ok(SummaryType::SynopsisParagraph),
            "headline" => Ok(SummaryType::Headline),
            other => Err(Error::InvalidSummaryType(other.to_string())),
        }
    }
}

/// Label produced by the sentiment classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl From<&str> for SentimentLabel {
    fn from(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("POSITIVE") {
            SentimentLabel::Positive
        } else if label.eq_ignore_ascii_case("NEGATIVE") {
            SentimentLabel::Negative
        } else if label.eq_ignore_ascii_case("NEUTRAL") {
            SentimentLabel::Neutral
        } else {
            SentimentLabel::Other(label.to_string())
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => f.write_str("POSITIVE"),
            SentimentLabel::Negative => f.write_str("NEGATIVE"),
            SentimentLabel::Neutral => f.write_str("NEUTRAL"),
            SentimentLabel::Other(label) => f.write_str(label),
        }
    }
}

/// Text extracted from a fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Text of every paragraph, joined by single spaces. Fed to the summarizer.
    pub paragraphs: String,
    /// Markup of the `<body>` element with newlines removed.
    pub body: String,
    /// Markup of the first `<header>` element with newlines removed.
    pub header: Option<String>,
}

/// Trims keywords, drops empty ones and removes duplicates, keeping first-seen order.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().trim();
        if !keyword.is_empty() && !normalized.iter().any(|k| k == keyword) {
            normalized.push(keyword.to_string());
        }
    }
    normalized
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub urls: Vec<String>,
    pub summary_type: SummaryType,
    pub keywords: Vec<String>,
}

impl SummaryRequest {
    pub fn new<K, S>(urls: Vec<String>, summary_type: &str, keywords: K) -> Result<Self>
    where
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            urls,
            summary_type: summary_type.parse()?,
            keywords: normalize_keywords(keywords),
        })
    }
}

/// Search constrained to a publication date range.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub keywords: Vec<String>,
    pub summary_type: SummaryType,
}

impl DateRangeQuery {
    /// Validates the raw request fields. Both dates are required and must be
    /// `YYYY-MM-DD` with `start <= end`.
    pub fn parse<K, S>(
        start: Option<&str>,
        end: Option<&str>,
        keywords: K,
        summary_type: &str,
    ) -> Result<Self>
    where
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            (None, _) => return Err(Error::MissingField("start_date")),
            (_, None) => return Err(Error::MissingField("end_date")),
        };

        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start > end {
            return Err(Error::InvalidDateRange(format!(
                "start_date {} is after end_date {}",
                start, end
            )));
        }

        Ok(Self {
            start,
            end,
            keywords: normalize_keywords(keywords),
            summary_type: summary_type.parse()?,
        })
    }

    /// The query string sent to the search provider.
    pub fn search_query(&self) -> String {
        let range = format!(
            "daterange:{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        );
        if self.keywords.is_empty() {
            range
        } else {
            format!("{} {}", self.keywords.join(" "), range)
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| Error::InvalidDateRange(format!("{:?} is not a YYYY-MM-DD date: {}", raw, e)))
}

/// A scored article. Built once per successfully summarized URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    url: String,
    summary: String,
    keyword_score: u64,
    authority_weight: f64,
    sentiment_weight: f64,
    weighted_score: f64,
    period: Option<Period>,
}

impl ArticleRecord {
    pub fn new(
        url: impl Into<String>,
        summary: impl Into<String>,
        keyword_score: u64,
        authority_weight: f64,
        sentiment_weight: f64,
        period: Option<Period>,
    ) -> Self {
        Self {
            url: url.into(),
            summary: summary.into(),
            keyword_score,
            authority_weight,
            sentiment_weight,
            weighted_score: keyword_score as f64 * authority_weight * sentiment_weight,
            period,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn keyword_score(&self) -> u64 {
        self.keyword_score
    }

    pub fn authority_weight(&self) -> f64 {
        self.authority_weight
    }

    pub fn sentiment_weight(&self) -> f64 {
        self.sentiment_weight
    }

    pub fn weighted_score(&self) -> f64 {
        self.weighted_score
    }

    pub fn period(&self) -> Option<Period> {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_display_and_parse() {
        let period = Period::new(2023, 3).unwrap();
        assert_eq!(period.to_string(), "2023-03");
        assert_eq!("2023-03".parse::<Period>().unwrap(), period);
        assert!("2023-13".parse::<Period>().is_err());
        assert!("2023-3".parse::<Period>().is_err());
        assert!("March 2023".parse::<Period>().is_err());
        assert!(Period::new(2023, 0).is_none());
    }

    #[test]
    fn test_period_serializes_as_string_key() {
        let mut totals = PeriodTotals::new();
        totals.insert(Period::new(2023, 1).unwrap(), 41.0);
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(json, r#"{"2023-01":41.0}"#);
        let back: PeriodTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, totals);
    }

    #[test]
    fn test_summary_type_parsing() {
        assert_eq!("headline".parse::<SummaryType>().unwrap(), SummaryType::Headline);
        assert_eq!("one-page synopsis".parse::<SummaryType>().unwrap(), SummaryType::SynopsisPage);
        assert_eq!(
            "synopsis-paragraph".parse::<SummaryType>().unwrap(),
            SummaryType::SynopsisParagraph
        );
        assert!(matches!(
            "bogus".parse::<SummaryType>(),
            Err(Error::InvalidSummaryType(t)) if t == "bogus"
        ));
        assert_eq!(SummaryType::default(), SummaryType::Headline);
    }

    #[test]
    fn test_summary_type_bounds() {
        assert_eq!(SummaryType::SynopsisPage.bounds(), LengthBounds { min: 200, max: 600 });
        assert_eq!(SummaryType::SynopsisParagraph.bounds(), LengthBounds { min: 50, max: 150 });
        assert_eq!(SummaryType::Headline.bounds(), LengthBounds { min: 10, max: 40 });
    }

    #[test]
    fn test_sentiment_label_from_str() {
        assert_eq!(SentimentLabel::from("POSITIVE"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from("negative"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from("NEUTRAL"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from("LABEL_1"), SentimentLabel::Other("LABEL_1".into()));
    }

    #[test]
    fn test_normalize_keywords() {
        let keywords = normalize_keywords([" climate", "policy ", "", "climate", "Climate"]);
        assert_eq!(keywords, vec!["climate", "policy", "Climate"]);
    }

    #[test]
    fn test_date_range_requires_both_dates() {
        let err = DateRangeQuery::parse(None, Some("2023-02-01"), ["x"], "headline").unwrap_err();
        assert!(matches!(err, Error::MissingField("start_date")));
        let err = DateRangeQuery::parse(Some("2023-01-01"), Some("  "), ["x"], "headline").unwrap_err();
        assert!(matches!(err, Error::MissingField("end_date")));
    }

    #[test]
    fn test_date_range_validation() {
        let err = DateRangeQuery::parse(Some("2023-02-01"), Some("2023-01-01"), ["x"], "headline")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange(_)));
        let err = DateRangeQuery::parse(Some("01/02/2023"), Some("2023-03-01"), ["x"], "headline")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange(_)));
        let err = DateRangeQuery::parse(Some("2023-01-01"), Some("2023-03-01"), ["x"], "bogus")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSummaryType(_)));
    }

    #[test]
    fn test_search_query() {
        let query = DateRangeQuery::parse(
            Some("2023-01-01"),
            Some("2023-03-31"),
            ["climate", "policy"],
            "headline",
        )
        .unwrap();
        assert_eq!(query.search_query(), "climate policy daterange:2023-01-01..2023-03-31");

        let query = DateRangeQuery::parse(Some("2023-01-01"), Some("2023-01-01"), Vec::<String>::new(), "headline")
            .unwrap();
        assert_eq!(query.search_query(), "daterange:2023-01-01..2023-01-01");
    }

    #[test]
    fn test_article_record_weighted_score() {
        let record = ArticleRecord::new("https://x.org/a", "summary", 2, 2.0, 10.0, None);
        assert_eq!(record.weighted_score(), 40.0);
        assert_eq!(record.keyword_score(), 2);
        assert!(record.period().is_none());

        let zero = ArticleRecord::new("https://x.io/a", "summary", 7, 0.0, 10.0, None);
        assert_eq!(zero.weighted_score(), 0.0);
    }
}
