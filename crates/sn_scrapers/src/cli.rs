use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use sn_core::{ArticleReport, Error, GenerationOptions, Result};
use sn_inference::{create_model, Config, ModelKind, Orchestrator, SummarizeConfig, DEFAULT_MAX_SEGMENT_WORDS};

use crate::fetcher::{FetcherConfig, HttpFetcher};
use crate::manager::ScraperManager;
use crate::scrapers::EntryContentScraper;

pub const NO_ARTICLES_MESSAGE: &str = "No articles found or an error occurred.";
pub const HEADER: &str = "Latest Security News Articles and Summaries:";

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    /// Listing page to summarize; prompted for when omitted
    pub url: Option<String>,

    /// Summarization backend
    #[arg(long, value_enum, default_value_t = ModelKind::Ollama)]
    pub model: ModelKind,

    /// Backend endpoint (for ollama, e.g. http://localhost:11434/llama3)
    #[arg(long)]
    pub model_url: Option<String>,

    /// API key for hosted backends
    #[arg(long, env = "SN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum words per segment sent to the model
    #[arg(long, default_value_t = DEFAULT_MAX_SEGMENT_WORDS)]
    pub max_segment_words: usize,

    /// Upper bound on each segment summary
    #[arg(long, default_value_t = 130)]
    pub max_summary_length: usize,

    /// Lower bound on each segment summary
    #[arg(long, default_value_t = 30)]
    pub min_summary_length: usize,

    /// Request timeout in seconds for pages and model calls (none by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the digest as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            url: None,
            model: ModelKind::default(),
            model_url: None,
            api_key: None,
            max_segment_words: DEFAULT_MAX_SEGMENT_WORDS,
            max_summary_length: 130,
            min_summary_length: 30,
            timeout: None,
            json: false,
        }
    }
}

impl SummarizeArgs {
    fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn inference_config(&self) -> Config {
        Config {
            model: self.model,
            model_url: self.model_url.clone(),
            api_key: self.api_key.clone(),
            timeout: self.timeout(),
        }
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            timeout: self.timeout(),
            user_agent: None,
        }
    }

    pub fn summarize_config(&self) -> Result<SummarizeConfig> {
        if self.max_segment_words == 0 {
            return Err(Error::Config("--max-segment-words must be greater than 0".to_string()));
        }
        if self.min_summary_length > self.max_summary_length {
            return Err(Error::Config(format!(
                "--min-summary-length ({}) exceeds --max-summary-length ({})",
                self.min_summary_length, self.max_summary_length
            )));
        }
        Ok(SummarizeConfig {
            max_segment_words: self.max_segment_words,
            options: GenerationOptions {
                max_length: self.max_summary_length,
                min_length: self.min_summary_length,
                deterministic: true,
            },
        })
    }
}

pub fn build_manager(args: &SummarizeArgs) -> Result<ScraperManager> {
    let summarizer = create_model(Some(args.inference_config()))?;
    let orchestrator = Orchestrator::new(summarizer, args.summarize_config()?);
    Ok(ScraperManager::new(
        Arc::new(HttpFetcher::new(args.fetcher_config())?),
        Arc::new(EntryContentScraper::new()?),
        orchestrator,
    ))
}

pub fn render_article(report: &ArticleReport) -> String {
    format!(
        "{}. {}\n   Link: {}\n   Summary: {}\n\n",
        report.index, report.title, report.link, report.outcome
    )
}

/// Runs the pipeline for `url` and writes the report to `out`.
pub async fn handle_command(
    args: &SummarizeArgs,
    manager: &ScraperManager,
    url: &str,
    out: &mut dyn Write,
) -> Result<()> {
    if args.json {
        let digest = manager.run(url, |_| {}).await;
        writeln!(out, "{}", serde_json::to_string_pretty(&digest)?)?;
        return Ok(());
    }

    writeln!(out, "Fetching latest articles from {}", url)?;

    let mut written: std::io::Result<()> = Ok(());
    let digest = manager
        .run(url, |report| {
            if written.is_err() {
                return;
            }
            if report.index == 1 {
                written = writeln!(out, "{}", HEADER);
            }
            if written.is_ok() {
                written = write!(out, "{}", render_article(report));
            }
        })
        .await;
    written?;

    if digest.is_empty() {
        writeln!(out, "{}", NO_ARTICLES_MESSAGE)?;
    }
    out.flush()?;
    Ok(())
}
