use thinkers_store::{read_jsonl, RunRecord};

use super::context;
use crate::cli::GlobalArgs;

fn format_run(run: &RunRecord) -> String {
    let mut line = format!(
        "  {} | {} | ok:{} failed:{} total:{} ({}s)",
        run.started_at.format("%Y-%m-%d %H:%M"),
        run.kind,
        run.succeeded.len(),
        run.failed.len(),
        run.total,
        run.duration_secs(),
    );
    for failure in &run.failed {
        line.push_str(&format!("\n      ✗ {}: {}", failure.thinker, failure.reason));
    }
    line
}

pub fn run(global: &GlobalArgs, limit: usize) -> anyhow::Result<()> {
    let dirs = context::load_config(global).dirs();
    let runs: Vec<RunRecord> = read_jsonl(&dirs.runs_log)?;

    if runs.is_empty() {
        println!("No batch runs recorded");
        return Ok(());
    }

    let recent: Vec<_> = runs.iter().rev().take(limit).collect();
    println!("Recent Runs (last {})", recent.len());
    println!("======================");
    for run in recent {
        println!("{}", format_run(run));
    }
    Ok(())
}
