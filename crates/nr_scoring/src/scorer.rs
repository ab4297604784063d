use nr_core::{ArticleRecord, Error, PageText, Result, SentimentLabel};

use crate::{authority, date, keywords, sentiment};

/// Everything known about one article once the collaborators have run.
#[derive(Debug, Clone)]
pub struct ArticleInput<'a> {
    pub url: &'a str,
    pub summary: &'a str,
    pub sentiment: &'a SentimentLabel,
    pub page: &'a PageText,
}

/// Combines keyword, authority and sentiment weights into one record.
#[derive(Debug, Clone, Default)]
pub struct ArticleScorer {
    keywords: Vec<String>,
}

impl ArticleScorer {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn score(&self, input: ArticleInput<'_>) -> Result<ArticleRecord> {
        if input.summary.trim().is_empty() {
            return Err(Error::EmptySummary {
                url: input.url.to_string(),
            });
        }

        let keyword_score = keywords::score(input.summary, &self.keywords);
        let authority_weight = authority::weight(input.url);
        let sentiment_weight = sentiment::weight(input.sentiment);
        let period = date::extract_period_from_page(input.page);

        let record = ArticleRecord::new(
            input.url,
            input.summary,
            keyword_score,
            authority_weight,
            sentiment_weight,
            period,
        );
        tracing::debug!(
            url = %input.url,
            keyword_score,
            authority_weight,
            sentiment_weight,
            weighted_score = record.weighted_score(),
            period = ?period.map(|p| p.to_string()),
            "Scored article"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> PageText {
        PageText {
            paragraphs: String::new(),
            body: body.to_string(),
            header: None,
        }
    }

    #[test]
    fn test_weighted_score_is_product() {
        let scorer = ArticleScorer::new(vec!["rates".into(), "fed".into()]);
        let page = page("<p>Jan 12, 2023</p>");
        let record = scorer
            .score(ArticleInput {
                url: "https://news.example.org/a",
                summary: "Fed raises rates",
                sentiment: &SentimentLabel::Positive,
                page: &page,
            })
            .unwrap();

        assert_eq!(record.keyword_score(), 2);
        assert_eq!(record.authority_weight(), 2.0);
        assert_eq!(record.sentiment_weight(), 10.0);
        assert_eq!(record.weighted_score(), 40.0);
        assert_eq!(record.period().unwrap().to_string(), "2023-01");
    }

    #[test]
    fn test_empty_summary_is_an_error() {
        let scorer = ArticleScorer::new(vec!["rates".into()]);
        let page = page("");
        let err = scorer
            .score(ArticleInput {
                url: "https://x.com/a",
                summary: "   ",
                sentiment: &SentimentLabel::Neutral,
                page: &page,
            })
            .unwrap_err();
        assert!(matches!(err, Error::EmptySummary { url } if url == "https://x.com/a"));
    }

    #[test]
    fn test_unknown_domain_zeroes_score() {
        let scorer = ArticleScorer::new(vec!["rates".into()]);
        let page = page("");
        let record = scorer
            .score(ArticleInput {
                url: "https://x.io/a",
                summary: "rates rates rates",
                sentiment: &SentimentLabel::Positive,
                page: &page,
            })
            .unwrap();
        assert_eq!(record.keyword_score(), 3);
        assert_eq!(record.weighted_score(), 0.0);
        assert!(record.period().is_none());
    }
}
