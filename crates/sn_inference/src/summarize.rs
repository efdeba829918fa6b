use std::fmt;
use std::sync::Arc;

use sn_core::{GenerationOptions, Result, Summarizer};
use tracing::debug;

use crate::chunking::chunk_text;

/// Word budget per segment, a stand-in for the model's input limit.
pub const DEFAULT_MAX_SEGMENT_WORDS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizeConfig {
    pub max_segment_words: usize,
    pub options: GenerationOptions,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            max_segment_words: DEFAULT_MAX_SEGMENT_WORDS,
            options: GenerationOptions::default(),
        }
    }
}

/// Chunks `text`, summarizes every segment in order and joins the results
/// with a single space.
///
/// The first summarizer error is returned as-is; no partial summary is kept.
pub async fn summarize_text(
    text: &str,
    summarizer: &dyn Summarizer,
    config: &SummarizeConfig,
) -> Result<String> {
    let segments = chunk_text(text, config.max_segment_words);
    debug!(
        "Split text into {} segment(s) of at most {} words",
        segments.len(),
        config.max_segment_words
    );

    let mut summaries = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        debug!("🤖 Summarizing segment {}/{} with {}", i + 1, segments.len(), summarizer.name());
        let summary = summarizer.summarize(segment, &config.options).await?;
        summaries.push(summary);
    }

    Ok(summaries.join(" "))
}

/// Owns a summarizer and the chunking settings used for every article.
#[derive(Clone)]
pub struct Orchestrator {
    summarizer: Arc<dyn Summarizer>,
    config: SummarizeConfig,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("summarizer", &self.summarizer.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Orchestrator {
    pub fn new(summarizer: Arc<dyn Summarizer>, config: SummarizeConfig) -> Self {
        Self { summarizer, config }
    }

    pub fn model_name(&self) -> &str {
        self.summarizer.name()
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        summarize_text(text, self.summarizer.as_ref(), &self.config).await
    }
}
