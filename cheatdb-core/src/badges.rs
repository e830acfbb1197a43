//! Badge flags shown next to code entries.
//!
//! Badges are derived from an entry's raw body and note, never from the
//! parser, so they stay correct when a front end edits a note after parsing.

use serde::{Deserialize, Serialize};

/// Marker for a value the user is expected to edit before applying a code.
const MOD_MARKER: &str = "{MOD}";
/// Inline amount placeholder (e.g. `[Amount:10:u32:LE]`).
const AMOUNT_MARKER: &str = "[Amount:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeFlags {
    /// The body has a user-editable value
    pub has_mods: bool,
    /// The entry carries a note block or a non-empty note
    pub has_note: bool,
}

impl BadgeFlags {
    pub fn is_empty(&self) -> bool {
        !self.has_mods && !self.has_note
    }
}

/// Compute badge flags from an entry's raw body and note.
pub fn compute(raw: &str, note_html: Option<&str>) -> BadgeFlags {
    let has_mods = raw.contains(MOD_MARKER) || raw.contains(AMOUNT_MARKER);
    let has_note = has_brace_block(raw) || note_html.is_some_and(|n| !n.trim().is_empty());
    BadgeFlags { has_mods, has_note }
}

/// True if `text` has a `{` followed somewhere later by a `}`.
fn has_brace_block(text: &str) -> bool {
    match text.find('{') {
        Some(open) => text[open + 1..].contains('}'),
        None => false,
    }
}
