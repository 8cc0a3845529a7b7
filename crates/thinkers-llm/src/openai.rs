//! OpenAI-compatible chat completions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{CompletionRequest, LlmError, TextGenerator};

// Note: no trailing slash
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const API_BASE_ENV: &str = "OPENAI_API_BASE";

/// Connection settings for [`OpenAiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base_from_env(),
            model: model.into(),
            timeout: Duration::from_secs(120),
        }
    }
}

fn api_base_from_env() -> String {
    std::env::var(API_BASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_base)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, retry_after, &text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;
        extract_content(parsed)
    }
}

/// Map a non-success HTTP status onto the failure taxonomy
fn classify_status(status: StatusCode, retry_after: Option<Duration>, body: &str) -> LlmError {
    let detail = format!("HTTP {}: {}", status.as_u16(), error_message(body));
    if status == StatusCode::TOO_MANY_REQUESTS {
        LlmError::RateLimited { retry_after }
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        LlmError::Auth(detail)
    } else if status == StatusCode::REQUEST_TIMEOUT || status.is_server_error() {
        LlmError::Transient(detail)
    } else {
        LlmError::InvalidRequest(detail)
    }
}

/// Pull `error.message` out of an API error body, else the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

fn transport_error(err: reqwest::Error) -> LlmError {
    if err.is_decode() {
        LlmError::InvalidResponse(err.to_string())
    } else if err.is_builder() {
        LlmError::InvalidRequest(err.to_string())
    } else {
        // timeouts, refused/reset connections, broken bodies
        LlmError::Transient(err.to_string())
    }
}

fn extract_content(response: ChatResponse) -> Result<String, LlmError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(LlmError::InvalidResponse(
            "response contained no generated text".to_string(),
        ));
    }
    Ok(content)
}
