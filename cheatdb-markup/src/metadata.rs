//! Recognizers for the declaration lines that can appear anywhere in a
//! database file: `Hash`/`GameID` metadata and `%Credits:`.

use std::sync::LazyLock;

use regex::Regex;

use cheatdb_core::{Credit, Metadata, MetadataKind};

/// Metadata line shapes in priority order. The first pattern that matches wins.
static METADATA_PATTERNS: LazyLock<Vec<(MetadataKind, Regex)>> = LazyLock::new(|| {
    [
        // ^1 [= Hash:] <value>
        (
            MetadataKind::Hash,
            r"(?i)^\s*\^1\s*(?:=\s*)?(?:hash\s*:\s*)?(?P<value>\S.*?)\s*$",
        ),
        // ^2 [= GameID:] <value>
        (
            MetadataKind::GameId,
            r"(?i)^\s*\^2\s*(?:=\s*)?(?:gameid\s*:\s*)?(?P<value>\S.*?)\s*$",
        ),
        (MetadataKind::Hash, r"(?i)^\s*hash\s*:\s*(?P<value>\S.*?)\s*$"),
        (MetadataKind::GameId, r"(?i)^\s*gameid\s*:\s*(?P<value>\S.*?)\s*$"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("built-in pattern")))
    .collect()
});

static CREDITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*%credits\s*:(?P<rest>.*)$").expect("built-in pattern")
});

/// Classify a line as a `Hash`/`GameID` declaration.
///
/// Returns `None` for anything else, including blank lines and declarations
/// with an empty value.
pub fn try_parse_metadata(line: &str) -> Option<Metadata> {
    if line.trim().is_empty() {
        return None;
    }
    METADATA_PATTERNS.iter().find_map(|(kind, re)| {
        let caps = re.captures(line)?;
        let value = caps.name("value")?.as_str().trim();
        (!value.is_empty()).then(|| Metadata::new(*kind, value))
    })
}

/// Classify a line as a `%Credits: Name[: Role]` declaration.
///
/// The role is split off at the first `:` after the keyword. A missing name
/// means no match; a missing or `N/A` role becomes `None`.
pub fn try_parse_credit(line: &str) -> Option<Credit> {
    let caps = CREDITS_PATTERN.captures(line)?;
    let rest = caps.name("rest")?.as_str();
    let (name, role) = match rest.split_once(':') {
        Some((name, role)) => (name.trim(), Some(role)),
        None => (rest.trim(), None),
    };
    if name.is_empty() {
        return None;
    }
    Some(Credit::new(name, role))
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
