use std::fmt;
use sn_core::{GenerationOptions, Result};
use super::{Summarizer, Config};

/// Offline summarizer that keeps the first `max_length` words of a segment.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new(_config: Option<Config>) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait::async_trait]
impl Summarizer for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, segment: &str, options: &GenerationOptions) -> Result<String> {
        let words: Vec<&str> = segment.split_whitespace().take(options.max_length).collect();
        Ok(words.join(" "))
    }
}
