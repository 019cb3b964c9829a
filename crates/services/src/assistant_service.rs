use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AssistantError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 500;

/// Connection settings for an OpenAI-compatible chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AssistantConfig {
    /// Reads `STUDY_AI_API_KEY`, `STUDY_AI_BASE_URL` and `STUDY_AI_MODEL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `None` when no non-blank API key is available.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup("STUDY_AI_API_KEY")?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = lookup("STUDY_AI_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = lookup("STUDY_AI_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key: api_key.trim().to_owned(),
            model,
        })
    }
}

/// Free-form Module 10 questions answered by a chat model.
#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    config: Option<AssistantConfig>,
}

impl AssistantService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AssistantConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.config.as_ref().map(|config| config.model.as_str())
    }

    /// Send `question` as a single user message and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` when the service is disabled, the question is
    /// blank, the request fails, or the response carries no text.
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let config = self.config.as_ref().ok_or(AssistantError::Disabled)?;
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: question.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        debug!(model = %config.model, chars = question.len(), "asking assistant");

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "assistant request rejected");
            return Err(AssistantError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
