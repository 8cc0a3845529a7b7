//! Essay and questionnaire generation for a roster of thinkers

pub mod artifact;
mod batch;
mod config;
mod generate;
pub mod prompts;
mod roster;

pub use artifact::{Artifact, ArtifactKind, ParsedArtifact};
pub use batch::{discover_essays, BatchSummary, ItemOutcome};
pub use config::{ApiKey, ConfigError, GenerationConfig, API_KEY_ENV};
pub use generate::{GenerateError, Generator};
pub use roster::{Roster, RosterError, Thinker};
