pub mod models;
pub mod error;
pub mod fetch;
pub mod types;

pub use error::{Error, Result};
pub use fetch::{FetchedPage, PageFetcher};
pub use models::{GenerationOptions, Summarizer};
pub use types::{ArticleRef, ArticleReport, Digest, SummaryOutcome};
