//! Artifact files: naming, metadata header and parsing

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thinkers_store::OutputDirs;

const SEPARATOR: &str = "==================================================";
const QUESTIONNAIRE_TYPE: &str = "Meaning in Life";

static HEADER_LINE_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Essay,
    Questionnaire,
}

impl ArtifactKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Essay => "essay",
            Self::Questionnaire => "questionnaire",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Essay => "_meaning.txt",
            Self::Questionnaire => "_questionnaire.txt",
        }
    }

    pub fn dir(self, dirs: &OutputDirs) -> &Path {
        match self {
            Self::Essay => &dirs.essays,
            Self::Questionnaire => &dirs.questionnaires,
        }
    }

    /// Deterministic artifact path for a thinker
    pub fn path_for(self, dirs: &OutputDirs, thinker: &str) -> PathBuf {
        self.dir(dirs).join(file_name(self, thinker))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercased name with spaces and path separators replaced by `_`
pub fn slug(thinker: &str) -> String {
    thinker
        .trim()
        .to_lowercase()
        .replace([' ', '/', '\\'], "_")
}

pub fn file_name(kind: ArtifactKind, thinker: &str) -> String {
    format!("{}{}", slug(thinker), kind.suffix())
}

/// Best-effort inverse of [`file_name`]: `jean-paul_sartre_meaning.txt` -> `Jean-Paul Sartre`
pub fn thinker_from_file_name(kind: ArtifactKind, file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(kind.suffix())?;
    if stem.is_empty() {
        return None;
    }
    let words: Vec<String> = stem
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            word.split('-')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect();
    Some(words.join(" "))
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A generated text ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub thinker: String,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    /// Essay a questionnaire was derived from
    pub source: Option<PathBuf>,
    pub body: String,
}

impl Artifact {
    /// Metadata header followed by the body
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Generated on: {}\n",
            self.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
        ));
        out.push_str(&format!("Thinker: {}\n", self.thinker));
        out.push_str(&format!("Model: {}\n", self.model));
        if self.kind == ArtifactKind::Questionnaire {
            out.push_str(&format!("Questionnaire Type: {}\n", QUESTIONNAIRE_TYPE));
        }
        if let Some(source) = &self.source {
            out.push_str(&format!("Source Essay: {}\n", source.display()));
        }
        out.push_str(SEPARATOR);
        out.push_str("\n\n");
        out.push_str(&self.body);
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Contents of an artifact file read back from disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArtifact {
    pub thinker: Option<String>,
    pub generated_at: Option<DateTime<Utc>>,
    pub model: Option<String>,
    pub source: Option<PathBuf>,
    pub body: String,
}

/// Parse a rendered artifact. Text without a header separator is taken
/// whole as the body.
pub fn parse(text: &str) -> ParsedArtifact {
    let Some((header, body)) = split_header(text) else {
        return ParsedArtifact {
            body: text.trim().to_string(),
            ..Default::default()
        };
    };

    let re = HEADER_LINE_RE.get_or_init(|| {
        Regex::new(r"^(Generated on|Thinker|Model|Source Essay|Questionnaire Type):\s*(.*?)\s*$")
            .unwrap()
    });

    let mut parsed = ParsedArtifact {
        body: body.trim().to_string(),
        ..Default::default()
    };
    for line in header.lines() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let value = caps[2].to_string();
        match &caps[1] {
            "Generated on" => parsed.generated_at = parse_timestamp(&value),
            "Thinker" => parsed.thinker = Some(value),
            "Model" => parsed.model = Some(value),
            "Source Essay" => parsed.source = Some(PathBuf::from(value)),
            _ => {}
        }
    }
    parsed
}

fn split_header(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end() == SEPARATOR {
            return Some((&text[..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

// Older files carry a local "YYYY-MM-DD HH:MM:SS" stamp
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|n| n.and_utc())
        })
}
