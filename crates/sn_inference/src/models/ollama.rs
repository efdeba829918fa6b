use std::fmt;
use serde::{Deserialize, Serialize};
use sn_core::{Error, GenerationOptions, Result};
use url::Url;
use super::{build_client, build_prompt, Config, Summarizer};

const DEFAULT_MODEL_URL: &str = "http://localhost:11434/llama3";
const DEFAULT_MODEL_NAME: &str = "llama3";

/// Endpoint and model name derived from a `http://host:port/model` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaModelConfig {
    base_url: String,
    model_name: String,
}

impl Default for OllamaModelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

impl OllamaModelConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let url = config.model_url.as_deref().unwrap_or(DEFAULT_MODEL_URL);
        let parsed_url = Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

        let host = parsed_url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("{}: missing host", url)))?;
        let port = parsed_url.port_or_known_default().unwrap_or(11434);

        let model_name = parsed_url.path().trim_matches('/').to_string();

        Ok(Self {
            base_url: format!("{}://{}:{}", parsed_url.scheme(), host, port),
            model_name: if model_name.is_empty() {
                DEFAULT_MODEL_NAME.to_string()
            } else {
                model_name
            },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl From<&GenerationOptions> for GenerateOptions {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            num_predict: options.max_length,
            temperature: options.deterministic.then_some(0.0),
            top_k: options.deterministic.then_some(1),
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Summarizer backed by a local Ollama server.
pub struct OllamaModel {
    client: reqwest::Client,
    config: OllamaModelConfig,
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

impl OllamaModel {
    pub fn new(config: Option<Config>) -> Result<Self> {
        let config = config.unwrap_or_default();
        Ok(Self {
            client: build_client(&config)?,
            config: OllamaModelConfig::from_config(&config)?,
        })
    }
}

#[async_trait::async_trait]
impl Summarizer for OllamaModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn summarize(&self, segment: &str, options: &GenerationOptions) -> Result<String> {
        let request = GenerateRequest {
            model: self.config.model_name(),
            prompt: build_prompt(segment, options),
            stream: false,
            options: options.into(),
        };

        let response = self.client
            .post(format!("{}/api/generate", self.config.base_url()))
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Inference(format!("Ollama request failed: {}", e)))?
            .json::<GenerateResponse>()
            .await?;

        Ok(response.response.trim().to_string())
    }
}
