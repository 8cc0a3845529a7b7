use thinkers_core::{ArtifactKind, Roster};
use thinkers_store::OutputDirs;

use super::context;
use crate::cli::GlobalArgs;

pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let roster = context::load_roster(global)?;
    let dirs = context::load_config(global).dirs();

    let source = match &global.roster {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    println!("Roster ({}, {} thinkers)", source, roster.len());
    println!("========================");
    print!("{}", format_roster(&roster, &dirs));
    Ok(())
}

/// One line per thinker with themes and which artifacts already exist
fn format_roster(roster: &Roster, dirs: &OutputDirs) -> String {
    let mut out = String::new();
    for thinker in roster.thinkers() {
        let mark = |kind: ArtifactKind| {
            if kind.path_for(dirs, &thinker.name).exists() {
                "✓"
            } else {
                "·"
            }
        };
        out.push_str(&format!(
            "  [essay {}] [questionnaire {}] {}",
            mark(ArtifactKind::Essay),
            mark(ArtifactKind::Questionnaire),
            thinker.name
        ));
        if !thinker.themes.is_empty() {
            out.push_str(&format!(" ({})", thinker.themes.join(", ")));
        }
        out.push('\n');
    }
    out
}
