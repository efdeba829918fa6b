use std::sync::Arc;
use sn_core::{GenerationOptions, Result};

pub use sn_core::Summarizer;
pub use crate::Config;

pub mod deepseek;
pub mod dummy;
pub mod ollama;

pub use deepseek::DeepSeekModel;
pub use dummy::DummyModel;
pub use ollama::OllamaModel;

/// Summarization backends selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelKind {
    #[default]
    Ollama,
    Deepseek,
    Dummy,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Ollama => "ollama",
            ModelKind::Deepseek => "deepseek",
            ModelKind::Dummy => "dummy",
        }
    }
}

pub fn create_model(config: Option<Config>) -> Result<Arc<dyn Summarizer>> {
    let config = config.unwrap_or_default();
    let kind = config.model;
    let model: Arc<dyn Summarizer> = match kind {
        ModelKind::Ollama => Arc::new(OllamaModel::new(Some(config))?),
        ModelKind::Deepseek => Arc::new(DeepSeekModel::new(Some(config))?),
        ModelKind::Dummy => Arc::new(DummyModel::new(Some(config))?),
    };
    tracing::debug!("Created {} summarizer (--model {})", model.name(), kind.as_str());
    Ok(model)
}

/// Prompt used by the LLM-backed summarizers.
pub(crate) fn build_prompt(segment: &str, options: &GenerationOptions) -> String {
    format!(
        "Summarize the following text in {} to {} words. Reply with the summary only.\n\n{}",
        options.min_length, options.max_length, segment
    )
}

pub(crate) fn build_client(config: &Config) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
