use async_trait::async_trait;

use crate::LlmError;

/// A single system + user prompt exchange
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Abstraction over whichever text generation backend is configured.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier recorded in artifact metadata
    fn model(&self) -> &str;

    /// Submit a prompt and return the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
