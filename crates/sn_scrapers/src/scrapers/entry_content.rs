//! Scraper for WordPress-style blogs, where listing headings are
//! `h2.entry-title` and the article body lives in `div.entry-content`.

use scraper::{Html, Selector};
use sn_core::{ArticleRef, Result};
use tracing::debug;
use url::Url;

use super::{utils, Scraper};

/// CSS selectors used to find listings and article bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub title: String,
    /// Looked up inside each title element.
    pub link: String,
    pub body: String,
    /// Looked up inside the body container.
    pub paragraph: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: "h2.entry-title".to_string(),
            link: "a".to_string(),
            body: "div.entry-content".to_string(),
            paragraph: "p".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryContentScraper {
    title: Selector,
    link: Selector,
    body: Selector,
    paragraph: Selector,
}

impl EntryContentScraper {
    pub fn new() -> Result<Self> {
        Self::with_selectors(&SelectorConfig::default())
    }

    pub fn with_selectors(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            title: utils::parse_selector(&config.title)?,
            link: utils::parse_selector(&config.link)?,
            body: utils::parse_selector(&config.body)?,
            paragraph: utils::parse_selector(&config.paragraph)?,
        })
    }
}

impl Scraper for EntryContentScraper {
    fn source(&self) -> &str {
        "entry-content"
    }

    fn extract_listing(&self, document: &Html, base: &Url) -> Vec<ArticleRef> {
        let mut articles = Vec::new();

        for heading in document.select(&self.title) {
            let title = utils::element_text(heading).trim().to_string();

            let Some(href) = heading
                .select(&self.link)
                .next()
                .and_then(|a| a.value().attr("href"))
            else {
                debug!("Skipping heading without a link: {:?}", title);
                continue;
            };

            match base.join(href) {
                Ok(link) => articles.push(ArticleRef::new(title, link.to_string())),
                Err(e) => debug!("Skipping unresolvable link {:?}: {}", href, e),
            }
        }

        articles
    }

    fn extract_article(&self, document: &Html) -> Option<String> {
        let container = document.select(&self.body).next()?;
        let paragraphs: Vec<String> = container
            .select(&self.paragraph)
            .map(utils::element_text)
            .collect();
        Some(paragraphs.join(" "))
    }
}
