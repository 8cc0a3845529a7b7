//! Thinkers and the roster processed in batch mode

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("thinker name must not be empty")]
    EmptyName,

    #[error("roster file {} lists no thinkers", .path.display())]
    Empty { path: PathBuf },

    #[error("failed to read roster file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A historical figure to write about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thinker {
    pub name: String,
    /// Themes mentioned in the essay prompt for flavor
    #[serde(default)]
    pub themes: Vec<String>,
}

impl Thinker {
    pub fn new(name: &str) -> Result<Self, RosterError> {
        Self::with_themes(name, Vec::new())
    }

    pub fn with_themes(name: &str, themes: Vec<String>) -> Result<Self, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            themes,
        })
    }
}

// Roster files accept either "Name" or {"name": ..., "themes": [...]}
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterEntry {
    Name(String),
    Full(Thinker),
}

/// Ordered list of thinkers handed to the batch driver
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    thinkers: Vec<Thinker>,
}

impl Roster {
    pub fn new(thinkers: Vec<Thinker>) -> Self {
        Self { thinkers }
    }

    /// The five existentialist and meaning-centred thinkers shipped by default
    pub fn builtin() -> Self {
        let entries: [(&str, &[&str]); 5] = [
            (
                "Viktor Frankl",
                &["logotherapy", "meaning through suffering", "responsibility"],
            ),
            ("Albert Camus", &["the absurd", "revolt", "Sisyphus"]),
            (
                "Jean-Paul Sartre",
                &["existence precedes essence", "radical freedom", "bad faith"],
            ),
            (
                "Friedrich Nietzsche",
                &["will to power", "eternal recurrence", "nihilism"],
            ),
            (
                "Søren Kierkegaard",
                &["leap of faith", "anxiety", "subjective truth"],
            ),
        ];

        let thinkers = entries
            .iter()
            .map(|(name, themes)| Thinker {
                name: name.to_string(),
                themes: themes.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { thinkers }
    }

    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let thinkers = names
            .into_iter()
            .map(|n| Thinker::new(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { thinkers })
    }

    /// Load a roster override from a JSON array
    pub fn from_json_file(path: &Path) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<RosterEntry> =
            serde_json::from_str(&content).map_err(|source| RosterError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if entries.is_empty() {
            return Err(RosterError::Empty {
                path: path.to_path_buf(),
            });
        }

        let thinkers = entries
            .into_iter()
            .map(|entry| match entry {
                RosterEntry::Name(name) => Thinker::new(&name),
                RosterEntry::Full(t) => Thinker::with_themes(&t.name, t.themes),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { thinkers })
    }

    pub fn thinkers(&self) -> &[Thinker] {
        &self.thinkers
    }

    pub fn len(&self) -> usize {
        self.thinkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thinkers.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.thinkers.iter().map(|t| t.name.as_str()).collect()
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&Thinker> {
        let wanted = name.trim().to_lowercase();
        self.thinkers
            .iter()
            .find(|t| t.name.to_lowercase() == wanted)
    }
}
