use crate::core::contextual::{display_amount, grouped_amount};
use crate::domain::model::{Intensity, RoastRequest};
use crate::domain::ports::RoastProvider;
use crate::utils::error::{ProviderError, Result, RoastError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";
pub const DEFAULT_REFERER: &str = "https://crypto-regret-engine.vercel.app";

/// Completions of this many characters or more are rejected.
pub const MAX_ROAST_CHARS: usize = 200;

const SYSTEM_PROMPT: &str = "You are a crypto veteran. Generate ONE roast about someone's financial regret. \
Maximum 20 words. One sentence. No emojis. No financial advice.";

#[derive(Debug, Clone, PartialEq)]
pub struct OpenRouterSettings {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub referer: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for OpenRouterSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            max_tokens: 50,
            temperature: 0.9,
            timeout: Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat completion client (OpenRouter by default).
pub struct OpenRouterProvider {
    settings: OpenRouterSettings,
    client: Client,
}

impl OpenRouterProvider {
    pub fn new(settings: OpenRouterSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(RoastError::HttpClientError)?;
        Ok(Self { settings, client })
    }

    fn api_key(&self) -> Option<&str> {
        if !self.settings.enabled {
            return None;
        }
        self.settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

pub fn tone_instruction(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Fun => "Be lighthearted and playful. Keep it friendly.",
        Intensity::Medium => "Be sarcastic and sharp, but not cruel.",
        Intensity::Savage => "Be brutally honest and savage. No mercy.",
    }
}

pub fn system_prompt(intensity: Intensity) -> String {
    format!("{} {}", SYSTEM_PROMPT, tone_instruction(intensity))
}

pub fn user_prompt(request: &RoastRequest) -> String {
    format!(
        "They spent ${} on {} instead of buying {}. It would be worth ${} now. Roast them.",
        display_amount(request.purchase_price),
        request.item,
        request.crypto,
        grouped_amount(request.regret_value)
    )
}

/// 取出第一個 choice 的文字並檢查長度。
fn extract_roast(body: ChatResponse) -> std::result::Result<String, ProviderError> {
    let content = body
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(ProviderError::EmptyCompletion)?;

    let roast = content.trim();
    if roast.is_empty() {
        return Err(ProviderError::EmptyCompletion);
    }

    let length = roast.chars().count();
    if length >= MAX_ROAST_CHARS {
        return Err(ProviderError::CompletionTooLong { length });
    }

    Ok(roast.to_string())
}

#[async_trait]
impl RoastProvider for OpenRouterProvider {
    async fn generate(&self, request: &RoastRequest) -> std::result::Result<String, ProviderError> {
        let api_key = self.api_key().ok_or(ProviderError::Unavailable)?;

        let payload = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(request.intensity),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(request),
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        tracing::debug!("Making provider request to: {}", self.settings.endpoint);
        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.settings.referer)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let body: ChatResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Malformed {
                message: e.to_string(),
            })?;

        extract_roast(body)
    }

    fn is_enabled(&self) -> bool {
        self.api_key().is_some()
    }
}
