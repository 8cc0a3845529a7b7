//! On-disk layout and file I/O for generated artifacts and run history

mod io;
mod paths;
mod types;

pub use io::{append_jsonl, atomic_write, list_artifacts, read_jsonl};
pub use paths::OutputDirs;
pub use types::{FailureRecord, RunRecord};
