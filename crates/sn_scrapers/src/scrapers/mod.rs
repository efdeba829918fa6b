use scraper::Html;
use sn_core::ArticleRef;
use url::Url;

pub mod entry_content;
pub use entry_content::{EntryContentScraper, SelectorConfig};

/// Locates articles on a listing page and body text on an article page.
///
/// A structural miss is not an error: the listing comes back empty and the
/// article body comes back as `None`.
pub trait Scraper: Send + Sync {
    /// Returns the name of the markup flavour this scraper understands
    fn source(&self) -> &str;

    /// Returns the (title, link) pairs of a listing page, top to bottom.
    /// Relative links are resolved against `base`.
    fn extract_listing(&self, document: &Html, base: &Url) -> Vec<ArticleRef>;

    /// Returns the article body, `Some("")` when the container has no paragraphs
    fn extract_article(&self, document: &Html) -> Option<String>;
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use scraper::{ElementRef, Selector};
    use sn_core::{Error, Result};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url.trim()).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }

    pub fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector {:?}: {}", selector, e)))
    }

    pub fn element_text(element: ElementRef<'_>) -> String {
        element.text().collect::<String>()
    }
}
