//! Text generation over a chat-completions API, with typed failures and retry

mod client;
mod error;
pub mod openai;
mod retry;

pub use client::{CompletionRequest, TextGenerator};
pub use error::LlmError;
pub use openai::{ClientConfig, OpenAiClient};
pub use retry::{with_retry, Backoff, RetryPolicy, Sleeper, TokioSleeper};
