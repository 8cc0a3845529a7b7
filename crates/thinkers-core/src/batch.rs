//! Sequential batch driver over a roster

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thinkers_llm::{Sleeper, TextGenerator};
use thinkers_store::{append_jsonl, list_artifacts, FailureRecord, OutputDirs, RunRecord};

use crate::artifact::{self, ArtifactKind};
use crate::{Generator, Roster, Thinker};

/// Final state of one roster entry
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Succeeded(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub kind: ArtifactKind,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Thinker name and outcome, in roster order
    pub items: Vec<(String, ItemOutcome)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> Vec<(&str, &Path)> {
        self.items
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                ItemOutcome::Succeeded(path) => Some((name.as_str(), path.as_path())),
                ItemOutcome::Failed(_) => None,
            })
            .collect()
    }

    pub fn failed(&self) -> Vec<(&str, &str)> {
        self.items
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                ItemOutcome::Failed(reason) => Some((name.as_str(), reason.as_str())),
                ItemOutcome::Succeeded(_) => None,
            })
            .collect()
    }

    pub fn to_run_record(&self) -> RunRecord {
        RunRecord {
            run_id: format!("{}-{}", self.kind, self.started_at.format("%Y%m%dT%H%M%S%3f")),
            kind: self.kind.label().to_string(),
            started_at: self.started_at,
            finished_at: self.finished_at,
            total: self.total(),
            succeeded: self
                .succeeded()
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect(),
            failed: self
                .failed()
                .into_iter()
                .map(|(thinker, reason)| FailureRecord {
                    thinker: thinker.to_string(),
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }
}

impl<C: TextGenerator, S: Sleeper> Generator<C, S> {
    /// Process every roster entry in order. Individual failures are
    /// recorded and never stop the run.
    pub async fn run_batch(&self, kind: ArtifactKind, roster: &Roster) -> BatchSummary {
        let started_at = Utc::now();
        let total = roster.len();
        let delay = self.config().delay_for(kind);
        let mut items = Vec::with_capacity(total);

        tracing::info!(kind = %kind, total, "starting batch");

        for (index, thinker) in roster.thinkers().iter().enumerate() {
            tracing::info!(thinker = %thinker.name, "processing {}/{}", index + 1, total);

            let outcome = match self.generate(kind, thinker).await {
                Ok(path) => ItemOutcome::Succeeded(path),
                Err(err) => {
                    tracing::error!(thinker = %thinker.name, error = %err, "{} failed", kind);
                    ItemOutcome::Failed(err.to_string())
                }
            };
            items.push((thinker.name.clone(), outcome));

            if index + 1 < total {
                tracing::debug!(delay_ms = delay.as_millis() as u64, "waiting before next request");
                self.sleeper().sleep(delay).await;
            }
        }

        let summary = BatchSummary {
            kind,
            started_at,
            finished_at: Utc::now(),
            items,
        };
        tracing::info!(
            kind = %kind,
            succeeded = summary.succeeded().len(),
            failed = summary.failed().len(),
            "batch complete"
        );
        summary
    }

    /// Append the summary to the run log
    pub fn record_run(&self, summary: &BatchSummary) -> std::io::Result<()> {
        append_jsonl(&self.dirs().runs_log, &summary.to_run_record())
    }
}

/// Roster of every thinker with an essay on disk, sorted by name.
///
/// Names come from the essay header when it maps back to the file, else from the file name.
pub fn discover_essays(dirs: &OutputDirs) -> std::io::Result<Roster> {
    let kind = ArtifactKind::Essay;
    let mut thinkers = Vec::new();

    for path in list_artifacts(kind.dir(dirs), kind.suffix())? {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let from_header = match std::fs::read_to_string(&path) {
            Ok(text) => artifact::parse(&text).thinker,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable essay");
                continue;
            }
        };
        // the name must lead back to this file or the essay won't be found again
        let name = from_header
            .filter(|n| artifact::file_name(kind, n) == file_name)
            .or_else(|| artifact::thinker_from_file_name(kind, file_name));
        if let Some(thinker) = name.and_then(|n| Thinker::new(&n).ok()) {
            thinkers.push(thinker);
        }
    }

    thinkers.sort_by(|a, b| a.name.cmp(&b.name));
    thinkers.dedup_by(|a, b| a.name == b.name);
    Ok(Roster::new(thinkers))
}
