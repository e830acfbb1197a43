//! Database markup parser.
//!
//! Turns the text files of one game into a [`Game`]. Parsing is line-driven
//! and best-effort: lines that don't fit the grammar are skipped, never
//! reported as errors. Group and entry state carries across files, so an
//! entry opened at the end of one file keeps collecting body lines from the
//! next.

use std::path::PathBuf;

use cheatdb_core::{CodeEntry, CodeGroup, Credit, Game, Metadata};

use crate::line::{Line, classify};

/// Counters collected over one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub files: usize,
    pub lines: usize,
    /// Lines outside any entry or note block that carried no declaration
    pub skipped_lines: usize,
}

/// Parse all files of one game.
///
/// `files` yields `(file_name, full_text)` pairs and is consumed in order.
pub fn parse_game<I, N, T>(
    game_id: &str,
    game_name: &str,
    folder: impl Into<PathBuf>,
    files: I,
) -> Game
where
    I: IntoIterator<Item = (N, T)>,
    N: AsRef<str>,
    T: AsRef<str>,
{
    let mut parser = Parser::new(game_id, game_name, folder);
    for (name, text) in files {
        parser.feed_file(name.as_ref(), text.as_ref());
    }
    parser.finish()
}

/// Buffer for one `{ ... }` note block.
#[derive(Debug, Default)]
struct NoteBuffer {
    open: bool,
    lines: Vec<String>,
}

impl NoteBuffer {
    /// Joined buffer contents, or `None` if nothing was buffered.
    fn take_joined(&mut self) -> Option<String> {
        self.open = false;
        if self.lines.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.lines).join("\n"))
    }
}

/// An entry that is still collecting body lines.
#[derive(Debug)]
struct OpenEntry {
    entry: CodeEntry,
    /// Index of the owning group in `Game::groups`
    group: usize,
    raw: String,
    note: NoteBuffer,
}

impl OpenEntry {
    fn can_open_note(&self) -> bool {
        !self.note.open && self.entry.note_html.is_none()
    }
}

/// Parse state for exactly one game.
///
/// Feed files with [`Parser::feed_file`] and call [`Parser::finish`] once.
#[derive(Debug)]
pub struct Parser {
    game: Game,
    current_group: Option<usize>,
    current_entry: Option<OpenEntry>,
    /// True until the first group or entry is opened
    in_top_note: bool,
    top_note: NoteBuffer,
    stats: ParseStats,
}

impl Parser {
    pub fn new(game_id: &str, game_name: &str, folder: impl Into<PathBuf>) -> Self {
        Self {
            game: Game::new(game_id, game_name, folder),
            current_group: None,
            current_entry: None,
            in_top_note: true,
            top_note: NoteBuffer::default(),
            stats: ParseStats::default(),
        }
    }

    /// Feed the full text of one file.
    pub fn feed_file(&mut self, file_name: &str, text: &str) {
        log::trace!("{}: parsing {file_name}", self.game.id);
        self.stats.files += 1;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        for line in text.split_inclusive('\n') {
            self.feed_line(line);
        }
        // The end of a file ends its last line, even when an entry continues
        // into the next file.
        if !text.is_empty() && !text.ends_with('\n') {
            if let Some(open) = self.current_entry.as_mut() {
                open.raw.push('\n');
            }
        }
    }

    /// Feed one line, including its original line terminator if it had one.
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines += 1;
        let content = line.trim_end_matches(['\n', '\r']);

        match classify(content) {
            Line::Group(name) => {
                self.seal_entry();
                self.end_top_note();
                self.game.groups.push(CodeGroup::new(name));
                self.current_group = Some(self.game.groups.len() - 1);
            }
            Line::GroupEnd => {
                self.seal_entry();
                self.current_group = None;
            }
            Line::CodeTitle(name) => {
                self.seal_entry();
                self.end_top_note();
                let group = self.ensure_group();
                self.current_entry = Some(OpenEntry {
                    entry: CodeEntry::new(name),
                    group,
                    raw: String::new(),
                    note: NoteBuffer::default(),
                });
            }
            Line::NoteOpen => self.open_note(line, content),
            Line::NoteClose => self.close_note(line, content),
            Line::Credit(credit) => {
                self.push_credit(credit);
                self.append_text(line, content, true);
            }
            Line::Metadata(metadata) => {
                self.push_metadata(metadata);
                self.append_text(line, content, true);
            }
            Line::Text => self.append_text(line, content, false),
        }
    }

    /// Seal any open entry and note, returning the parsed game.
    pub fn finish(self) -> Game {
        self.finish_with_stats().0
    }

    pub fn finish_with_stats(mut self) -> (Game, ParseStats) {
        self.seal_entry();
        self.end_top_note();
        log::debug!(
            "{}: {} groups, {} entries, {} metadata, {} credits ({} lines, {} skipped)",
            self.game.id,
            self.game.groups.len(),
            self.game.entry_count(),
            self.game.metadata.len(),
            self.game.credits.len(),
            self.stats.lines,
            self.stats.skipped_lines,
        );
        (self.game, self.stats)
    }

    fn push_credit(&mut self, credit: Credit) {
        self.game.credits.push(credit);
    }

    fn push_metadata(&mut self, metadata: Metadata) {
        self.game.metadata.push(metadata);
    }

    /// Index of the active group, opening a fresh `(Ungrouped)` group if none is active.
    fn ensure_group(&mut self) -> usize {
        match self.current_group {
            Some(index) => index,
            None => {
                self.game.groups.push(CodeGroup::ungrouped());
                let index = self.game.groups.len() - 1;
                self.current_group = Some(index);
                index
            }
        }
    }

    fn open_note(&mut self, line: &str, content: &str) {
        if let Some(open) = self.current_entry.as_mut() {
            if open.can_open_note() {
                open.note.open = true;
                open.raw.push_str(line);
                return;
            }
        } else if self.in_top_note && !self.top_note.open {
            self.top_note.open = true;
            return;
        }
        self.append_text(line, content, false);
    }

    fn close_note(&mut self, line: &str, content: &str) {
        if let Some(open) = self.current_entry.as_mut() {
            if open.note.open {
                open.entry.note_html = Some(open.note.take_joined().unwrap_or_default());
                open.raw.push_str(line);
                return;
            }
        } else if self.in_top_note && self.top_note.open {
            self.game.top_note_html = Some(self.top_note.take_joined().unwrap_or_default());
            return;
        }
        self.append_text(line, content, false);
    }

    /// Route a non-structural line to the open entry or the top note buffer.
    fn append_text(&mut self, line: &str, content: &str, declaration: bool) {
        if let Some(open) = self.current_entry.as_mut() {
            open.raw.push_str(line);
            if open.note.open {
                open.note.lines.push(content.to_string());
            }
        } else if self.in_top_note && self.top_note.open {
            self.top_note.lines.push(content.to_string());
        } else if !declaration {
            self.stats.skipped_lines += 1;
            log::trace!("{}: skipped line {:?}", self.game.id, content);
        }
    }

    /// Close the top-note region for good. An unclosed block keeps what it buffered.
    fn end_top_note(&mut self) {
        if !self.in_top_note {
            return;
        }
        self.in_top_note = false;
        if self.top_note.open {
            if let Some(note) = self.top_note.take_joined() {
                self.game.top_note_html = Some(note);
            }
        }
    }

    fn seal_entry(&mut self) {
        let Some(OpenEntry {
            mut entry,
            group,
            raw,
            mut note,
        }) = self.current_entry.take()
        else {
            return;
        };

        entry.raw = raw.trim_end().to_string();
        if entry.note_html.is_none() {
            entry.note_html = note.take_joined();
        }
        self.game.groups[group].codes.push(entry);
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
