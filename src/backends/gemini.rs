//! Google Gemini client for debate turns.
//!
//! Talks to the `v1beta/models/{model}:generateContent` endpoint. Each
//! participant brings its own model and key, so one client serves both sides.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chat::{conversation_for, ChatMessage, ChatRole};
use crate::config::build_prompt;
use crate::error::{DebateError, GenerationError};
use crate::provider::{ResponseProvider, TurnRequest};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.8;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
const TRUNCATED_FINISH_REASON: &str = "MAX_TOKENS";
const CONTINUE_INSTRUCTION: &str = "Continue exactly where you left off. No repetition.";

/// Configuration for the Gemini client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Base URL of the API, without the `/v1beta` path.
    pub endpoint: String,
    /// Model used when a participant leaves its model blank.
    pub default_model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output token cap per request.
    pub max_output_tokens: u32,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_seconds: None,
        }
    }
}

/// Client for the Gemini API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct Gemini {
    pub config: Arc<GeminiConfig>,
    pub client: Client,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize, Debug)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Deserialize, Debug)]
struct GeminiErrorBody {
    message: String,
}

/// Text of the first candidate and whether it was cut at the token cap.
#[derive(Debug, Default)]
struct Completion {
    text: String,
    truncated: bool,
}

impl GeminiResponse {
    fn completion(&self) -> Completion {
        let Some(candidate) = self.candidates.first() else {
            return Completion::default();
        };
        let text = candidate
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string();
        Completion {
            text,
            truncated: candidate.finish_reason.as_deref() == Some(TRUNCATED_FINISH_REASON),
        }
    }
}

impl Gemini {
    pub fn new(config: GeminiConfig) -> Result<Self, DebateError> {
        let mut builder = Client::builder();
        if let Some(sec) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    /// Creates a Gemini client with a custom HTTP client.
    pub fn with_client(client: Client, config: GeminiConfig) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    fn url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            model
        )
    }

    async fn generate_once(
        &self,
        model: &str,
        api_key: &str,
        system: &str,
        history: &[ChatMessage],
    ) -> Result<Completion, GenerationError> {
        let mut contents = Vec::with_capacity(history.len() + 1);
        if !system.is_empty() {
            contents.push(GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: system }],
            });
        }
        contents.extend(history.iter().map(|msg| GeminiContent {
            role: match msg.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "model",
            },
            parts: vec![GeminiPart { text: &msg.content }],
        }));

        let body = GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Gemini request payload: {}", json);
            }
        }

        let resp = self
            .client
            .post(self.url(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        log::debug!("Gemini HTTP status: {}", status);
        let raw = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(GenerationError::transport(format!(
                "Gemini returned {status}: {message}"
            )));
        }

        let parsed: GeminiResponse = serde_json::from_str(&raw)?;
        Ok(parsed.completion())
    }
}

#[async_trait]
impl ResponseProvider for Gemini {
    fn name(&self) -> &str {
        "gemini"
    }

    /// Requests the next reply for `request.side`.
    ///
    /// A reply cut at the token cap gets exactly one continuation request.
    async fn generate(&self, request: &TurnRequest<'_>) -> Result<String, GenerationError> {
        let Some(api_key) = request.participant.api_key() else {
            return Err(GenerationError::missing_credential());
        };
        let model = match request.participant.model.trim() {
            "" => self.config.default_model.as_str(),
            model => model,
        };
        let system = build_prompt(request.side, request.settings);
        let mut history = conversation_for(request.side, request.transcript);

        let first = self
            .generate_once(model, api_key, &system, &history)
            .await?;
        if first.text.is_empty() {
            return Err(GenerationError::empty_response());
        }
        if !first.truncated {
            return Ok(first.text);
        }

        log::debug!("Gemini reply hit the token cap, requesting continuation");
        history.push(ChatMessage::assistant().content(first.text.clone()).build());
        history.push(ChatMessage::user().content(CONTINUE_INSTRUCTION).build());
        match self.generate_once(model, api_key, &system, &history).await {
            Ok(next) if !next.text.is_empty() => {
                Ok(format!("{} {}", first.text, next.text).trim().to_string())
            }
            Ok(_) => Ok(first.text),
            Err(err) => {
                log::warn!("Gemini continuation failed, keeping partial reply: {err}");
                Ok(first.text)
            }
        }
    }
}
