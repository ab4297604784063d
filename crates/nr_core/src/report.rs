use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{ArticleRecord, Period, PeriodTotals};

/// Rounds to two decimals. Only applied when building reports.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wire view of an [`ArticleRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleReport {
    pub url: String,
    pub summary: String,
    pub score: u64,
    pub weight: f64,
    pub sentiment_weight: f64,
    pub weighted_score: f64,
    pub date: Option<Period>,
}

impl From<&ArticleRecord> for ArticleReport {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            url: record.url().to_string(),
            summary: record.summary().to_string(),
            score: record.keyword_score(),
            weight: round2(record.authority_weight()),
            sentiment_weight: round2(record.sentiment_weight()),
            weighted_score: round2(record.weighted_score()),
            date: record.period(),
        }
    }
}

/// An article left out of a batch because a collaborator failed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedArticle {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub results: Vec<ArticleReport>,
    pub grouped_summaries: BTreeMap<Period, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedArticle>,
}

impl ScoreReport {
    pub fn new(records: &[ArticleRecord], totals: &PeriodTotals, skipped: Vec<SkippedArticle>) -> Self {
        Self {
            results: records.iter().map(ArticleReport::from).collect(),
            grouped_summaries: totals
                .iter()
                .map(|(period, total)| (*period, round2(*total)))
                .collect(),
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.675_1), 2.68);
        assert_eq!(round2(40.0), 40.0);
    }

    #[test]
    fn test_report_wire_format() {
        let period = Period::new(2023, 1).unwrap();
        let record = ArticleRecord::new("https://x.org/a", "rates rise", 2, 2.0, 10.0, Some(period));
        let mut totals = PeriodTotals::new();
        totals.insert(period, 40.0);

        let report = ScoreReport::new(&[record], &totals, Vec::new());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["results"][0]["url"], "https://x.org/a");
        assert_eq!(json["results"][0]["score"], 2);
        assert_eq!(json["results"][0]["weight"], 2.0);
        assert_eq!(json["results"][0]["sentiment_weight"], 10.0);
        assert_eq!(json["results"][0]["weighted_score"], 40.0);
        assert_eq!(json["results"][0]["date"], "2023-01");
        assert_eq!(json["grouped_summaries"]["2023-01"], 40.0);
        assert!(json.get("skipped").is_none());
    }

    #[test]
    fn test_report_keeps_undated_articles() {
        let record = ArticleRecord::new("https://x.com/a", "no date", 1, 1.0, 5.0, None);
        let report = ScoreReport::new(
            &[record],
            &PeriodTotals::new(),
            vec![SkippedArticle { url: "https://down.org".into(), error: "Fetch error: 503".into() }],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["results"][0]["date"].is_null());
        assert_eq!(json["grouped_summaries"], serde_json::json!({}));
        assert_eq!(json["skipped"][0]["url"], "https://down.org");
    }
}
