//! Single-item essay and questionnaire generation

use chrono::Utc;
use std::path::{Path, PathBuf};
use thinkers_llm::{with_retry, CompletionRequest, LlmError, Sleeper, TextGenerator};
use thinkers_store::{atomic_write, OutputDirs};
use thiserror::Error;

use crate::artifact::{self, Artifact, ArtifactKind, ParsedArtifact};
use crate::{prompts, GenerationConfig, Thinker};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("no essay for {thinker} at {}; run `thinkers essay \"{thinker}\"` first", .path.display())]
    MissingEssay { thinker: String, path: PathBuf },

    #[error("essay for {thinker} at {} has no body", .path.display())]
    EmptyEssay { thinker: String, path: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Drives prompt construction, the API call and the artifact write
pub struct Generator<C, S> {
    client: C,
    sleeper: S,
    config: GenerationConfig,
    dirs: OutputDirs,
}

impl<C: TextGenerator, S: Sleeper> Generator<C, S> {
    pub fn new(client: C, sleeper: S, config: GenerationConfig) -> Self {
        let dirs = config.dirs();
        Self {
            client,
            sleeper,
            config,
            dirs,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn dirs(&self) -> &OutputDirs {
        &self.dirs
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub async fn generate(
        &self,
        kind: ArtifactKind,
        thinker: &Thinker,
    ) -> Result<PathBuf, GenerateError> {
        match kind {
            ArtifactKind::Essay => self.essay(thinker).await,
            ArtifactKind::Questionnaire => self.questionnaire(thinker).await,
        }
    }

    /// Generate and write one essay, returning the file written
    pub async fn essay(&self, thinker: &Thinker) -> Result<PathBuf, GenerateError> {
        tracing::info!(thinker = %thinker.name, "generating essay");

        let request = CompletionRequest {
            system: prompts::ESSAY_SYSTEM.to_string(),
            prompt: prompts::essay_prompt(thinker),
            max_tokens: self.config.max_tokens_for(ArtifactKind::Essay),
            temperature: self.config.temperature,
        };
        let body = self.call(&request).await?;

        self.write(&Artifact {
            kind: ArtifactKind::Essay,
            thinker: thinker.name.clone(),
            generated_at: Utc::now(),
            model: self.client.model().to_string(),
            source: None,
            body,
        })
    }

    /// Generate a questionnaire from the thinker's existing essay.
    ///
    /// Fails with [`GenerateError::MissingEssay`] before any API call when
    /// the essay has not been generated yet.
    pub async fn questionnaire(&self, thinker: &Thinker) -> Result<PathBuf, GenerateError> {
        let (essay_path, essay) = self.read_essay(&thinker.name)?;
        tracing::info!(
            thinker = %thinker.name,
            essay = %essay_path.display(),
            chars = essay.body.chars().count(),
            "generating questionnaire"
        );

        let request = CompletionRequest {
            system: prompts::QUESTIONNAIRE_SYSTEM.to_string(),
            prompt: prompts::questionnaire_prompt(&thinker.name, &essay.body),
            max_tokens: self.config.max_tokens_for(ArtifactKind::Questionnaire),
            temperature: self.config.temperature,
        };
        let body = self.call(&request).await?;

        self.write(&Artifact {
            kind: ArtifactKind::Questionnaire,
            thinker: thinker.name.clone(),
            generated_at: Utc::now(),
            model: self.client.model().to_string(),
            source: Some(essay_path),
            body,
        })
    }

    /// Load a previously generated essay
    pub fn read_essay(&self, thinker: &str) -> Result<(PathBuf, ParsedArtifact), GenerateError> {
        let path = ArtifactKind::Essay.path_for(&self.dirs, thinker);
        if !path.exists() {
            return Err(GenerateError::MissingEssay {
                thinker: thinker.to_string(),
                path,
            });
        }

        let text = std::fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;
        let parsed = artifact::parse(&text);
        if parsed.body.is_empty() {
            return Err(GenerateError::EmptyEssay {
                thinker: thinker.to_string(),
                path,
            });
        }
        Ok((path, parsed))
    }

    async fn call(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        with_retry(&self.config.retry, &self.sleeper, |_| {
            self.client.complete(request)
        })
        .await
    }

    fn write(&self, artifact: &Artifact) -> Result<PathBuf, GenerateError> {
        let path = artifact.kind.path_for(&self.dirs, &artifact.thinker);
        atomic_write(&path, artifact.render().as_bytes()).map_err(|source| io_error(&path, source))?;
        tracing::info!(thinker = %artifact.thinker, path = %path.display(), "{} saved", artifact.kind);
        Ok(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.to_path_buf(),
        source,
    }
}
