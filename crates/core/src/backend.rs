//! Generative-text backends.
//!
//! The extractor depends only on [`GenerativeBackend`]. [`OpenAiBackend`] talks to any
//! OpenAI-compatible chat-completions endpoint; tests substitute in-process fakes.

use crate::config::BackendSettings;
use crate::constants::FORM_INSTRUCTION;
use crate::{BackendError, CoreError, CoreResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A capability that turns a form description into raw model text.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Issue one generation request for `prompt` and return the raw completion text.
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Chat-completions client with a fixed system instruction.
#[derive(Clone, Debug)]
pub struct OpenAiBackend {
    client: reqwest::Client,
    settings: BackendSettings,
    instruction: String,
}

impl OpenAiBackend {
    /// Create a backend that sends the standard form-extraction instruction.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::HttpClient` if the HTTP client cannot be built.
    pub fn new(settings: BackendSettings) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(CoreError::HttpClient)?;
        Ok(Self {
            client,
            settings,
            instruction: FORM_INSTRUCTION.to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl GenerativeBackend for OpenAiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let body = ChatRequest {
            model: self.settings.model(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.instruction,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.settings.temperature(),
            max_tokens: self.settings.max_tokens(),
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.settings.api_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(BackendError::EmptyCompletion)
    }
}
