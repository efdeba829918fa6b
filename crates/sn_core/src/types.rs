use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A (title, link) pair found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub link: String,
}

impl ArticleRef {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// What happened to a single article once the pipeline was done with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Summary(String),
    /// The page could not be fetched, or it had no body text.
    NoContent,
    /// The summarizer failed; holds the error text.
    Failed(String),
}

impl SummaryOutcome {
    pub fn is_summary(&self) -> bool {
        matches!(self, SummaryOutcome::Summary(_))
    }
}

impl fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryOutcome::Summary(text) => f.write_str(text),
            SummaryOutcome::NoContent => f.write_str("Could not fetch article content"),
            SummaryOutcome::Failed(err) => write!(f, "Could not generate summary ({})", err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleReport {
    /// 1-based position on the listing page.
    pub index: usize,
    pub title: String,
    pub link: String,
    pub outcome: SummaryOutcome,
}

/// Everything produced by one run over a listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<ArticleReport>,
}

impl Digest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            articles: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn summarized_count(&self) -> usize {
        self.articles.iter().filter(|a| a.outcome.is_summary()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let outcome = SummaryOutcome::Summary("Patch now.".to_string());
        assert_eq!(outcome.to_string(), "Patch now.");

        assert_eq!(
            SummaryOutcome::NoContent.to_string(),
            "Could not fetch article content"
        );

        let outcome = SummaryOutcome::Failed("Inference error: input too long".to_string());
        assert_eq!(
            outcome.to_string(),
            "Could not generate summary (Inference error: input too long)"
        );
    }

    #[test]
    fn test_digest_counts() {
        let mut digest = Digest::new("https://news.example.com");
        assert!(digest.is_empty());

        digest.articles.push(ArticleReport {
            index: 1,
            title: "One".to_string(),
            link: "https://news.example.com/one".to_string(),
            outcome: SummaryOutcome::Summary("short".to_string()),
        });
        digest.articles.push(ArticleReport {
            index: 2,
            title: "Two".to_string(),
            link: "https://news.example.com/two".to_string(),
            outcome: SummaryOutcome::NoContent,
        });

        assert!(!digest.is_empty());
        assert_eq!(digest.summarized_count(), 1);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(SummaryOutcome::Failed("boom".to_string())).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["detail"], "boom");

        let json = serde_json::to_value(SummaryOutcome::NoContent).unwrap();
        assert_eq!(json["status"], "no_content");
    }
}
