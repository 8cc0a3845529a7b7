//! Run history record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One thinker that failed during a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub thinker: String,
    pub reason: String,
}

/// Summary of a completed batch run, one line per run in the run log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: String,
    /// "essay" or "questionnaire"
    pub kind: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    #[serde(default)]
    pub succeeded: Vec<String>,
    #[serde(default)]
    pub failed: Vec<FailureRecord>,
}

impl RunRecord {
    pub fn duration_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
