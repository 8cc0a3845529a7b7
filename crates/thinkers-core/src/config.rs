//! Generation settings and credential resolution

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thinkers_llm::RetryPolicy;
use thinkers_store::OutputDirs;
use thiserror::Error;

use crate::ArtifactKind;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "THINKERS_MODEL";
pub const OUTPUT_DIR_ENV: &str = "THINKERS_OUTPUT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found: set OPENAI_API_KEY or pass --api-key")]
    MissingCredential,
}

/// API credential; never printed in full
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Explicit value wins over the environment. Blank counts as missing.
    pub fn resolve(explicit: Option<&str>, env_value: Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |k: &str| {
            let k = k.trim();
            (!k.is_empty()).then(|| k.to_string())
        };
        explicit
            .and_then(non_blank)
            .or_else(|| env_value.as_deref().and_then(non_blank))
            .map(Self)
            .ok_or(ConfigError::MissingCredential)
    }

    pub fn from_env(explicit: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, std::env::var(API_KEY_ENV).ok())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Generation configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Model identifier sent to the API
    pub model: String,

    pub temperature: f32,

    pub essay_max_tokens: u32,

    pub questionnaire_max_tokens: u32,

    /// Pause between consecutive essays in a batch
    pub essay_delay: Duration,

    /// Pause between consecutive questionnaires in a batch
    pub questionnaire_delay: Duration,

    pub retry: RetryPolicy,

    /// HTTP request timeout
    pub request_timeout: Duration,

    /// Root under which artifact directories and the run log live
    pub output_root: PathBuf,
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.7,
            essay_max_tokens: 1000,
            questionnaire_max_tokens: 2000,
            essay_delay: Duration::from_secs(2),
            questionnaire_delay: Duration::from_secs(3),
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(120),
            output_root: PathBuf::from("."),
        }
    }

    /// Defaults overlaid with `THINKERS_MODEL` / `THINKERS_OUTPUT_DIR`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(model) = non_empty_env(MODEL_ENV) {
            config.model = model;
        }
        if let Some(root) = non_empty_env(OUTPUT_DIR_ENV) {
            config.output_root = PathBuf::from(root);
        }
        config
    }

    pub fn dirs(&self) -> OutputDirs {
        OutputDirs::under(&self.output_root)
    }

    pub fn max_tokens_for(&self, kind: ArtifactKind) -> u32 {
        match kind {
            ArtifactKind::Essay => self.essay_max_tokens,
            ArtifactKind::Questionnaire => self.questionnaire_max_tokens,
        }
    }

    pub fn delay_for(&self, kind: ArtifactKind) -> Duration {
        match kind {
            ArtifactKind::Essay => self.essay_delay,
            ArtifactKind::Questionnaire => self.questionnaire_delay,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GenerationConfig::new();
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.max_tokens_for(ArtifactKind::Essay), 1000);
        assert_eq!(config.max_tokens_for(ArtifactKind::Questionnaire), 2000);
        assert_eq!(config.delay_for(ArtifactKind::Essay), Duration::from_secs(2));
        assert_eq!(
            config.delay_for(ArtifactKind::Questionnaire),
            Duration::from_secs(3)
        );
        assert!(config.dirs().essays.ends_with("thinkers_texts"));
    }

    #[test]
    fn test_api_key_precedence() {
        let key = ApiKey::resolve(Some("sk-flag"), Some("sk-env".into())).unwrap();
        assert_eq!(key.expose(), "sk-flag");

        let key = ApiKey::resolve(None, Some("sk-env".into())).unwrap();
        assert_eq!(key.expose(), "sk-env");
    }

    #[test]
    fn test_api_key_missing_or_blank() {
        assert!(matches!(
            ApiKey::resolve(None, None),
            Err(ConfigError::MissingCredential)
        ));
        assert!(ApiKey::resolve(None, Some("   ".into())).is_err());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::resolve(Some("sk-secret"), None).unwrap();
        assert!(!format!("{key:?}").contains("secret"));
    }
}
