use std::fmt;
use std::time::Duration;

pub mod chunking;
pub mod models;
pub mod summarize;

pub use models::{create_model, ModelKind};
pub use summarize::{summarize_text, Orchestrator, SummarizeConfig, DEFAULT_MAX_SEGMENT_WORDS};

#[derive(Clone, Default)]
pub struct Config {
    pub model: ModelKind,
    /// Backend endpoint; for Ollama the path names the model.
    pub model_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("model_url", &self.model_url)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
