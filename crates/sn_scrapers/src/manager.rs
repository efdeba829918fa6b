use std::fmt;
use std::sync::Arc;

use scraper::Html;
use sn_core::{ArticleRef, ArticleReport, Digest, PageFetcher, Result, SummaryOutcome};
use sn_inference::Orchestrator;
use tracing::{error, info};
use url::Url;

use crate::logging::Logger;
use crate::scrapers::{utils, Scraper};

/// Drives one run: listing page, then fetch, extract and summarize each
/// article in listing order, one at a time.
pub struct ScraperManager {
    fetcher: Arc<dyn PageFetcher>,
    scraper: Arc<dyn Scraper>,
    orchestrator: Orchestrator,
}

impl fmt::Debug for ScraperManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScraperManager")
            .field("scraper", &self.scraper.source())
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}

impl ScraperManager {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        scraper: Arc<dyn Scraper>,
        orchestrator: Orchestrator,
    ) -> Self {
        Self {
            fetcher,
            scraper,
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Fetches the listing page and returns its article references.
    pub async fn fetch_listing(&self, url: &str) -> Result<Vec<ArticleRef>> {
        let requested = utils::parse_url(url)?;
        let page = self.fetcher.fetch(url).await?;
        // Resolve links against where we ended up after redirects.
        let base = Url::parse(&page.url).unwrap_or(requested);

        let articles = self.parse_listing(&page.text(), &base);
        info!(
            "📰 Found {} article(s) on {} ({} markup)",
            articles.len(),
            base,
            self.scraper.source()
        );
        Ok(articles)
    }

    /// Fetches an article page and extracts its body text.
    pub async fn fetch_article_text(&self, link: &str) -> Result<Option<String>> {
        let page = self.fetcher.fetch(link).await?;
        Ok(self.parse_article(&page.text()))
    }

    fn parse_listing(&self, body: &str, base: &Url) -> Vec<ArticleRef> {
        let document = Html::parse_document(body);
        self.scraper.extract_listing(&document, base)
    }

    fn parse_article(&self, body: &str) -> Option<String> {
        let document = Html::parse_document(body);
        self.scraper.extract_article(&document)
    }

    /// Never fails: every problem becomes the article's outcome.
    pub async fn process_article(&self, index: usize, total: usize, article: &ArticleRef) -> ArticleReport {
        let logger = Logger::new().with_prefix(format!("[{}/{}]", index, total));
        logger.info(&format!("📥 Fetching {}", article.link));

        let outcome = match self.fetch_article_text(&article.link).await {
            Err(e) => {
                logger.warn(&format!("Failed to fetch {}: {}", article.link, e));
                SummaryOutcome::NoContent
            }
            Ok(None) => {
                logger.warn("No article body found on page");
                SummaryOutcome::NoContent
            }
            Ok(Some(text)) if text.is_empty() => {
                logger.warn("Article body has no paragraphs");
                SummaryOutcome::NoContent
            }
            Ok(Some(text)) => {
                logger.debug(&format!("Extracted {} characters", text.len()));
                logger.info(&format!("🤖 Summarizing with {}", self.orchestrator.model_name()));
                match self.orchestrator.summarize(&text).await {
                    Ok(summary) => {
                        logger.info("✨ Summary generated");
                        SummaryOutcome::Summary(summary)
                    }
                    Err(e) => {
                        logger.error(&format!("Summarization failed: {}", e));
                        SummaryOutcome::Failed(e.to_string())
                    }
                }
            }
        };

        ArticleReport {
            index,
            title: article.title.clone(),
            link: article.link.clone(),
            outcome,
        }
    }

    /// Runs the whole pipeline, handing each report to `on_article` as soon as
    /// it is ready. A listing failure yields an empty digest.
    pub async fn run<F>(&self, url: &str, mut on_article: F) -> Digest
    where
        F: FnMut(&ArticleReport),
    {
        let mut digest = Digest::new(url);

        let articles = match self.fetch_listing(url).await {
            Ok(articles) => articles,
            Err(e) => {
                error!("Error fetching the URL: {}", e);
                return digest;
            }
        };

        let total = articles.len();
        for (i, article) in articles.iter().enumerate() {
            let report = self.process_article(i + 1, total, article).await;
            on_article(&report);
            digest.articles.push(report);
        }

        info!(
            "✅ Summarized {}/{} article(s) from {}",
            digest.summarized_count(),
            total,
            url
        );
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sn_core::{Error, FetchedPage, GenerationOptions, Summarizer};
    use sn_inference::SummarizeConfig;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::scrapers::EntryContentScraper;

    const LISTING_URL: &str = "https://news.example.com/";

    /// Serves canned pages; anything else is a 404.
    #[derive(Default)]
    struct StubFetcher {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.pages.get(url) {
                Some(body) => Ok(FetchedPage {
                    url: url.to_string(),
                    status: 200,
                    body: body.clone().into_bytes(),
                }),
                None => Err(Error::Fetch(format!("{} returned 404 Not Found", url))),
            }
        }
    }

    /// Uppercases its input, failing on segments that contain "EXPLODE".
    struct StubSummarizer;

    #[async_trait]
    impl Summarizer for StubSummarizer {
        fn name(&self) -> &str {
            "stub"
        }

        async fn summarize(&self, segment: &str, _options: &GenerationOptions) -> Result<String> {
            if segment.contains("EXPLODE") {
                return Err(Error::Inference("model crashed".to_string()));
            }
            Ok(segment.to_uppercase())
        }
    }

    fn listing(links: &[(&str, &str)]) -> String {
        let items: String = links
            .iter()
            .map(|(title, href)| format!(r#"<h2 class="entry-title"><a href="{}">{}</a></h2>"#, href, title))
            .collect();
        format!("<html><body>{}</body></html>", items)
    }

    fn article(paragraphs: &[&str]) -> String {
        let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();
        format!(r#"<html><body><div class="entry-content">{}</div></body></html>"#, body)
    }

    fn manager(fetcher: StubFetcher) -> ScraperManager {
        ScraperManager::new(
            Arc::new(fetcher),
            Arc::new(EntryContentScraper::new().unwrap()),
            Orchestrator::new(Arc::new(StubSummarizer), SummarizeConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_run_reports_each_outcome_in_order() {
        let fetcher = StubFetcher::default()
            .with_page(
                LISTING_URL,
                &listing(&[
                    ("Good", "/good"),
                    ("Broken model", "/explode"),
                    ("Gone", "/gone"),
                    ("No body", "/nobody"),
                    ("Empty body", "/empty"),
                    ("Also good", "/also-good"),
                ]),
            )
            .with_page("https://news.example.com/good", &article(&["Patch released.", "Update now."]))
            .with_page("https://news.example.com/explode", &article(&["EXPLODE here."]))
            .with_page("https://news.example.com/nobody", "<html><body><p>Nothing</p></body></html>")
            .with_page("https://news.example.com/empty", &article(&[]))
            .with_page("https://news.example.com/also-good", &article(&["Second story."]));
        let manager = manager(fetcher);

        let mut streamed = Vec::new();
        let digest = manager.run(LISTING_URL, |report| streamed.push(report.index)).await;

        assert_eq!(streamed, vec![1, 2, 3, 4, 5, 6]);
        let outcomes: Vec<String> = digest.articles.iter().map(|a| a.outcome.to_string()).collect();
        assert_eq!(
            outcomes,
            vec![
                "PATCH RELEASED. UPDATE NOW.".to_string(),
                "Could not generate summary (Inference error: model crashed)".to_string(),
                "Could not fetch article content".to_string(),
                "Could not fetch article content".to_string(),
                "Could not fetch article content".to_string(),
                "SECOND STORY.".to_string(),
            ]
        );
        assert_eq!(digest.articles[0].title, "Good");
        assert_eq!(digest.articles[0].link, "https://news.example.com/good");
        assert_eq!(digest.summarized_count(), 2);
    }

    #[tokio::test]
    async fn test_run_with_failed_listing() {
        let manager = manager(StubFetcher::default());

        let mut calls = 0;
        let digest = manager.run(LISTING_URL, |_| calls += 1).await;

        assert!(digest.is_empty());
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_run_with_empty_listing() {
        let fetcher = StubFetcher::default().with_page(LISTING_URL, "<html><body><h2>Nothing</h2></body></html>");
        let manager = manager(fetcher);

        let digest = manager.run(LISTING_URL, |_| {}).await;
        assert!(digest.is_empty());
        assert_eq!(digest.source, LISTING_URL);
    }

    #[tokio::test]
    async fn test_fetch_listing_rejects_invalid_url() {
        let manager = manager(StubFetcher::default());
        let err = manager.fetch_listing("nope").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_articles_are_fetched_sequentially_in_listing_order() {
        let fetcher = Arc::new(
            StubFetcher::default()
                .with_page(LISTING_URL, &listing(&[("B", "/b"), ("A", "/a")]))
                .with_page("https://news.example.com/a", &article(&["a."]))
                .with_page("https://news.example.com/b", &article(&["b."])),
        );
        let manager = ScraperManager::new(
            fetcher.clone(),
            Arc::new(EntryContentScraper::new().unwrap()),
            Orchestrator::new(Arc::new(StubSummarizer), SummarizeConfig::default()),
        );

        manager.run(LISTING_URL, |_| {}).await;

        let requests = fetcher.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![
                LISTING_URL.to_string(),
                "https://news.example.com/b".to_string(),
                "https://news.example.com/a".to_string(),
            ]
        );
    }
}
