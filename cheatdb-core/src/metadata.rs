use serde::{Deserialize, Serialize};

/// The two kinds of metadata a database file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKind {
    /// Executable or image hash the codes were written against.
    #[serde(rename = "Hash")]
    Hash,
    /// Title/product identifier (e.g. `"SLUS-20312"`).
    #[serde(rename = "GameID")]
    GameId,
}

impl MetadataKind {
    /// Returns the tag used in database files and serialized output.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Hash => "Hash",
            Self::GameId => "GameID",
        }
    }

    pub fn all() -> &'static [MetadataKind] {
        &[Self::Hash, Self::GameId]
    }
}

impl std::fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error returned when a string is not a metadata tag.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown metadata kind: '{0}'")]
pub struct MetadataKindParseError(pub String);

impl std::str::FromStr for MetadataKind {
    type Err = MetadataKindParseError;

    /// Parse a metadata kind from its tag (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MetadataKindParseError(s.to_string()))
    }
}

/// A `Hash` or `GameID` declaration found anywhere in a game's files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub kind: MetadataKind,
    /// Declared value, trimmed of surrounding whitespace.
    pub value: String,
}

impl Metadata {
    pub fn new(kind: MetadataKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Placeholder role that database authors use for "no role".
pub const NO_ROLE_PLACEHOLDER: &str = "N/A";

/// A `%Credits:` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Contributor name (never empty)
    pub name: String,
    /// What they contributed, if stated
    pub role: Option<String>,
}

impl Credit {
    /// Build a credit, folding an empty or `N/A` role into `None`.
    pub fn new(name: impl Into<String>, role: Option<&str>) -> Self {
        let role = role
            .map(str::trim)
            .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case(NO_ROLE_PLACEHOLDER))
            .map(str::to_string);
        Self {
            name: name.into(),
            role,
        }
    }
}
