//! Patch file composition.
//!
//! A patch file is a sequence of blocks separated by blank lines:
//!
//! ```text
//! [Infinite HP]
//! 20123456 000003E7
//!
//! [Max Money]
//! 20123458 0098967F
//! ```
//!
//! Each body goes through [`normalize`] first. Files are written as UTF-8
//! without a byte-order mark.

use std::fs;
use std::path::{Path, PathBuf};

use cheatdb_core::CodeEntry;

use crate::error::PatchError;
use crate::reflow::{LINE_ENDING, normalize};

/// Extension of generated patch files.
pub const PATCH_EXTENSION: &str = "txt";

/// One `[Name]` block to compose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchItem {
    pub name: String,
    /// Raw code text, normalized during composition
    pub code: String,
}

impl PatchItem {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

impl From<&CodeEntry> for PatchItem {
    fn from(entry: &CodeEntry) -> Self {
        Self::new(entry.name.clone(), entry.raw.clone())
    }
}

/// Compose the full patch text for `items`, in order.
pub fn compose_patch_text(items: &[PatchItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push('[');
        out.push_str(item.name.trim());
        out.push(']');
        out.push_str(LINE_ENDING);
        out.push_str(&normalize(&item.code));
        out.push_str(LINE_ENDING);
        out.push_str(LINE_ENDING);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Compose patch text straight from parsed entries.
pub fn compose_from_entries<'a>(entries: impl IntoIterator<Item = &'a CodeEntry>) -> String {
    let items: Vec<PatchItem> = entries.into_iter().map(PatchItem::from).collect();
    compose_patch_text(&items)
}

/// Timestamped file name, e.g. `cheatdb_patch_20250301_184512.txt`.
pub fn patch_file_name() -> String {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("cheatdb_patch_{stamp}.{PATCH_EXTENSION}")
}

/// Timestamped patch path in the system temp directory.
pub fn default_patch_path() -> PathBuf {
    std::env::temp_dir().join(patch_file_name())
}

/// Compose `items` and write them to `target`, or to [`default_patch_path`]
/// when no target is given. Returns the path written.
///
/// Nothing is created on disk when the composed text is empty.
pub fn write_patch_file(
    items: &[PatchItem],
    target: Option<&Path>,
) -> Result<PathBuf, PatchError> {
    let text = compose_patch_text(items);
    if text.is_empty() {
        return Err(PatchError::EmptyPatch);
    }

    let path = match target {
        Some(p) => p.to_path_buf(),
        None => default_patch_path(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&path, text.as_bytes())?;

    log::debug!(
        "Wrote {} patch blocks ({} bytes) to {}",
        items.len(),
        text.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(parts: &[&str]) -> String {
        parts.join(LINE_ENDING)
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let items = vec![
            PatchItem::new("  Infinite HP ", "20123456 000003e7"),
            PatchItem::new("Max Money", "20123458 0098967F\n20123460 [Amount:10:u32:LE]\n"),
        ];
        assert_eq!(
            compose_patch_text(&items),
            lines(&[
                "[Infinite HP]",
                "20123456 000003E7",
                "",
                "[Max Money]",
                "20123458 0098967F",
                "20123460 [Amount:10:u32:LE]",
            ])
        );
    }

    #[test]
    fn bodies_are_reflowed() {
        let items = vec![PatchItem::new("Code", "11111111 22222222 33333333")];
        assert_eq!(
            compose_patch_text(&items),
            lines(&["[Code]", "11111111 22222222", "33333333 00000000"])
        );
    }

    #[test]
    fn empty_body_keeps_header() {
        let items = vec![
            PatchItem::new("Empty", ""),
            PatchItem::new("Next", "AAAAAAAA BBBBBBBB"),
        ];
        assert_eq!(
            compose_patch_text(&items),
            lines(&["[Empty]", "", "", "[Next]", "AAAAAAAA BBBBBBBB"])
        );
    }

    #[test]
    fn no_items_compose_to_nothing() {
        assert_eq!(compose_patch_text(&[]), "");
    }

    #[test]
    fn entries_convert_to_items() {
        let mut entry = CodeEntry::new("From Entry");
        entry.raw = "aaaaaaaa bbbbbbbb".to_string();
        assert_eq!(
            compose_from_entries([&entry]),
            lines(&["[From Entry]", "AAAAAAAA BBBBBBBB"])
        );
    }

    #[test]
    fn file_name_has_timestamp_and_extension() {
        let name = patch_file_name();
        assert!(name.starts_with("cheatdb_patch_"));
        assert!(name.ends_with(".txt"));
        // cheatdb_patch_ + YYYYmmdd_HHMMSS + .txt
        assert_eq!(name.len(), "cheatdb_patch_".len() + 15 + 4);
        assert!(default_patch_path().starts_with(std::env::temp_dir()));
    }
}
