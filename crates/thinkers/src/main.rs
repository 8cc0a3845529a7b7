mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use thinkers_core::ArtifactKind;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Essay { name } => {
            commands::generate::run(&cli.global, ArtifactKind::Essay, name.as_deref(), false)
        }
        Commands::Questionnaire { name, discover } => commands::generate::run(
            &cli.global,
            ArtifactKind::Questionnaire,
            name.as_deref(),
            discover,
        ),
        Commands::Roster => commands::roster::run(&cli.global),
        Commands::History { limit } => commands::history::run(&cli.global, limit),
        Commands::Version => commands::version::run(),
    }
}
