use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "thinkers")]
#[command(version)]
#[command(about = "Generate essays and questionnaires on thinkers' ideas about meaning")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// API key (defaults to $OPENAI_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Model to use (defaults to $THINKERS_MODEL or gpt-4)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Directory holding thinkers_texts/ and generated_questionnaires/
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// JSON roster replacing the built-in list
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the essay for one thinker, or for the whole roster
    Essay {
        /// Thinker name (omit to process the roster)
        name: Option<String>,
    },

    /// Generate a questionnaire from a thinker's essay, or for the whole roster
    Questionnaire {
        /// Thinker name (omit to process the roster)
        name: Option<String>,

        /// Process every thinker with an essay on disk instead of the roster
        #[arg(long, conflicts_with = "name")]
        discover: bool,
    },

    /// Show the roster in use
    Roster,

    /// Show recent batch runs
    History {
        /// Number of runs to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Print version information
    Version,
}
