#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use thinkers_core::{GenerationConfig, Generator};
use thinkers_llm::{Backoff, CompletionRequest, LlmError, RetryPolicy, Sleeper, TextGenerator};

/// Deterministic client: answers per thinker from a script, otherwise
/// echoes a numbered text. The thinker is identified by name in the prompt.
#[derive(Default)]
pub struct ScriptedClient {
    scripts: Mutex<HashMap<String, VecDeque<Result<String, LlmError>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue responses for `thinker`; once drained the default reply is used
    pub fn script(self, thinker: &str, responses: Vec<Result<String, LlmError>>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(thinker.to_string(), responses.into());
        self
    }

    /// Always fail for `thinker`
    pub fn fail_always(self, thinker: &str, err: LlmError) -> Self {
        let responses = std::iter::repeat(Err(err)).take(64).collect();
        self.script(thinker, responses)
    }

    pub fn calls_for(&self, thinker: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.as_str() == thinker)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn thinker_in(&self, prompt: &str, known: &[String]) -> String {
        known
            .iter()
            .find(|name| prompt.contains(name.as_str()))
            .cloned()
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[async_trait]
impl TextGenerator for ScriptedClient {
    fn model(&self) -> &str {
        "scripted-1"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let mut scripts = self.scripts.lock().unwrap();
        let mut known: Vec<String> = scripts.keys().cloned().collect();
        known.extend(KNOWN_THINKERS.iter().map(|s| s.to_string()));
        let thinker = self.thinker_in(&request.prompt, &known);

        let mut calls = self.calls.lock().unwrap();
        calls.push(thinker.clone());
        let n = calls.iter().filter(|t| **t == thinker).count();

        if let Some(Some(reply)) = scripts.get_mut(&thinker).map(|q| q.pop_front()) {
            return reply;
        }
        Ok(format!("Text about {thinker} #{n}"))
    }
}

const KNOWN_THINKERS: &[&str] = &[
    "Viktor Frankl",
    "Albert Camus",
    "Jean-Paul Sartre",
    "Friedrich Nietzsche",
    "Søren Kierkegaard",
];

/// Fake clock: records requested sleeps without waiting
#[derive(Default)]
pub struct RecordingSleeper {
    pub slept: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

impl RecordingSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

pub fn sample_config(root: &Path) -> GenerationConfig {
    GenerationConfig {
        output_root: root.to_path_buf(),
        essay_delay: Duration::from_secs(2),
        questionnaire_delay: Duration::from_secs(3),
        retry: RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
            backoff: Backoff::Exponential,
        },
        ..GenerationConfig::new()
    }
}

pub fn generator(
    root: &Path,
    client: ScriptedClient,
) -> Generator<ScriptedClient, RecordingSleeper> {
    Generator::new(client, RecordingSleeper::default(), sample_config(root))
}
