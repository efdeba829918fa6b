pub mod scrapers;
pub mod cli;
pub mod fetcher;
pub mod logging;
pub mod manager;

pub use manager::ScraperManager;

pub use cli::{SummarizeArgs, build_manager, handle_command, render_article};
pub use fetcher::{FetcherConfig, HttpFetcher};
pub use scrapers::{EntryContentScraper, Scraper, SelectorConfig};
