use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::badges::{self, BadgeFlags};
use crate::metadata::{Credit, Metadata, MetadataKind};

/// Name of the implicit group that collects entries declared outside any group.
pub const UNGROUPED_NAME: &str = "(Ungrouped)";

/// Everything parsed from one game's database files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    /// Identifier supplied by the caller (usually the folder name)
    pub id: String,
    /// Display name
    pub name: String,
    /// Folder the files were read from
    pub folder: PathBuf,
    /// Groups in file order
    pub groups: Vec<CodeGroup>,
    /// `Hash`/`GameID` declarations across all files, in encounter order
    pub metadata: Vec<Metadata>,
    /// Credits across all files, in encounter order
    pub credits: Vec<Credit>,
    /// HTML note declared before the first group or entry
    pub top_note_html: Option<String>,
}

impl Game {
    pub fn new(id: impl Into<String>, name: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folder: folder.into(),
            ..Default::default()
        }
    }

    /// Iterate every entry of every group, in file order.
    pub fn entries(&self) -> impl Iterator<Item = &CodeEntry> {
        self.groups.iter().flat_map(|g| g.codes.iter())
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut CodeEntry> {
        self.groups.iter_mut().flat_map(|g| g.codes.iter_mut())
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.codes.len()).sum()
    }

    /// All entries whose name matches `name` (case-insensitive, trimmed).
    ///
    /// Entry names are not unique, so this can return several entries.
    pub fn find_entries(&self, name: &str) -> Vec<&CodeEntry> {
        let wanted = name.trim();
        self.entries()
            .filter(|e| e.name.eq_ignore_ascii_case(wanted))
            .collect()
    }

    /// First group whose name matches `name` (case-insensitive, trimmed).
    pub fn find_group(&self, name: &str) -> Option<&CodeGroup> {
        let wanted = name.trim();
        self.groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(wanted))
    }

    /// Values of every metadata entry of the given kind, in encounter order.
    pub fn metadata_values(&self, kind: MetadataKind) -> impl Iterator<Item = &str> {
        self.metadata
            .iter()
            .filter(move |m| m.kind == kind)
            .map(|m| m.value.as_str())
    }

    /// Compute badge flags for every entry that doesn't have them yet.
    pub fn compute_badges(&mut self) {
        for entry in self.entries_mut() {
            entry.badges();
        }
    }
}

/// A named bucket of code entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeGroup {
    pub name: String,
    /// Informational only; nothing in the grammar sets it today.
    pub is_sub_group: bool,
    pub codes: Vec<CodeEntry>,
}

impl CodeGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn ungrouped() -> Self {
        Self::new(UNGROUPED_NAME)
    }

    pub fn is_ungrouped(&self) -> bool {
        self.name == UNGROUPED_NAME
    }
}

/// One named cheat with its raw payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeEntry {
    pub name: String,
    /// Body text exactly as written (note markup included), trailing whitespace trimmed
    pub raw: String,
    /// HTML note, `None` when the entry has no note block
    pub note_html: Option<String>,
    /// Filled in on demand by [`CodeEntry::badges`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_flags: Option<BadgeFlags>,
}

impl CodeEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Badge flags for this entry, computed on first use.
    pub fn badges(&mut self) -> BadgeFlags {
        *self
            .badge_flags
            .get_or_insert_with(|| badges::compute(&self.raw, self.note_html.as_deref()))
    }

    /// Replace the note and drop any cached badges that depended on it.
    pub fn set_note_html(&mut self, note: Option<String>) {
        self.note_html = note;
        self.badge_flags = None;
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
