use thinkers_core::{
    discover_essays, ApiKey, ArtifactKind, BatchSummary, Generator, Roster, Thinker,
};
use thinkers_llm::{Sleeper, TextGenerator};
use thinkers_store::{list_artifacts, OutputDirs};

use super::context;
use crate::cli::GlobalArgs;

enum Target {
    Single(Thinker),
    Batch(Roster),
}

pub fn run(
    global: &GlobalArgs,
    kind: ArtifactKind,
    name: Option<&str>,
    discover: bool,
) -> anyhow::Result<()> {
    // Fatal before anything touches disk or network
    let api_key = ApiKey::from_env(global.api_key.as_deref())?;
    let config = context::load_config(global);

    let target = match name {
        Some(name) => Target::Single(single_thinker(&context::load_roster(global)?, name)?),
        None if discover => Target::Batch(discover_essays(&config.dirs())?),
        None => Target::Batch(context::load_roster(global)?),
    };

    let generator = context::build_generator(&api_key, config)?;
    context::runtime()?.block_on(execute(&generator, kind, target))
}

/// Roster entry for `name` when there is one, so its themes reach the prompt
fn single_thinker(roster: &Roster, name: &str) -> anyhow::Result<Thinker> {
    match roster.find(name) {
        Some(thinker) => Ok(thinker.clone()),
        None => Ok(Thinker::new(name)?),
    }
}

async fn execute<C: TextGenerator, S: Sleeper>(
    generator: &Generator<C, S>,
    kind: ArtifactKind,
    target: Target,
) -> anyhow::Result<()> {
    match target {
        Target::Single(thinker) => {
            println!("Generating {} for {}...", kind, thinker.name);
            match generator.generate(kind, &thinker).await {
                Ok(path) => println!("✓ {} saved to {}", kind, path.display()),
                // per-item failures are reported, not fatal
                Err(err) => println!("✗ Failed to generate {} for {}: {}", kind, thinker.name, err),
            }
            Ok(())
        }
        Target::Batch(roster) => {
            if roster.is_empty() {
                println!("No thinkers to process.");
                if kind == ArtifactKind::Questionnaire {
                    println!(
                        "Generate essays first with `thinkers essay` (looked in {}).",
                        generator.dirs().essays.display()
                    );
                }
                return Ok(());
            }

            println!(
                "Starting {} generation for {} thinkers: {}",
                kind,
                roster.len(),
                roster.names().join(", ")
            );
            let summary = generator.run_batch(kind, &roster).await;
            if let Err(err) = generator.record_run(&summary) {
                tracing::warn!(error = %err, "failed to append run log");
            }
            print!("{}", format_summary(&summary, generator.dirs()));
            Ok(())
        }
    }
}

fn format_summary(summary: &BatchSummary, dirs: &OutputDirs) -> String {
    let succeeded = summary.succeeded();
    let failed = summary.failed();

    let mut out = String::new();
    out.push_str(&format!("\nBatch {} generation complete\n", summary.kind));
    out.push_str("============================\n");
    out.push_str(&format!("Succeeded: {}\n", succeeded.len()));
    out.push_str(&format!("Failed:    {}\n", failed.len()));
    out.push_str(&format!("Total:     {}\n", summary.total()));

    if !failed.is_empty() {
        out.push_str("\nFailures:\n");
        for (thinker, reason) in &failed {
            out.push_str(&format!("  - {}: {}\n", thinker, reason));
        }
    }

    if !succeeded.is_empty() {
        let dir = summary.kind.dir(dirs);
        out.push_str(&format!("\nFiles in {}:\n", dir.display()));
        for path in list_artifacts(dir, summary.kind.suffix()).unwrap_or_default() {
            if let Some(name) = path.file_name() {
                out.push_str(&format!("  - {}\n", name.to_string_lossy()));
            }
        }
    }
    out
}
