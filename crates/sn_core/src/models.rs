use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::Result;

/// Generation bounds handed to the summarizer for every segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_length: usize,
    pub min_length: usize,
    /// Greedy decoding instead of sampling.
    pub deterministic: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            deterministic: true,
        }
    }
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Summarize a single segment of text
    async fn summarize(&self, segment: &str, options: &GenerationOptions) -> Result<String>;
}
