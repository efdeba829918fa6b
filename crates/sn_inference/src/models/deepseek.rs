use std::fmt;
use serde::{Deserialize, Serialize};
use sn_core::{Error, GenerationOptions, Result};
use super::{build_client, build_prompt, Config, Summarizer};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const MODEL_NAME: &str = "deepseek-chat";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Summarizer backed by an OpenAI-compatible chat completions endpoint.
pub struct DeepSeekModel {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for DeepSeekModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepSeekModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DeepSeekModel {
    pub fn new(config: Option<Config>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Inference("DeepSeek API key is required".to_string()))?;

        Ok(Self {
            client: build_client(&config)?,
            api_key,
            base_url: config
                .model_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Summarizer for DeepSeekModel {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn summarize(&self, segment: &str, options: &GenerationOptions) -> Result<String> {
        let request = ChatRequest {
            model: MODEL_NAME.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(segment, options),
            }],
            max_tokens: options.max_length,
            temperature: options.deterministic.then_some(0.0),
        };

        let response = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Inference(format!("DeepSeek request failed: {}", e)))?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::Inference("DeepSeek returned no choices".to_string()))
    }
}
