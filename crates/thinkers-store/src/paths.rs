//! Output directory layout

use std::path::{Path, PathBuf};

const ESSAYS_DIR: &str = "thinkers_texts";
const QUESTIONNAIRES_DIR: &str = "generated_questionnaires";
const RUNS_LOG: &str = "runs.jsonl";

/// Resolves where artifacts and the run log live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub essays: PathBuf,
    pub questionnaires: PathBuf,
    pub runs_log: PathBuf,
}

impl OutputDirs {
    /// Standard layout below an output root
    pub fn under(root: &Path) -> Self {
        Self {
            essays: root.join(ESSAYS_DIR),
            questionnaires: root.join(QUESTIONNAIRES_DIR),
            runs_log: root.join(RUNS_LOG),
        }
    }
}
