//! Hex reflow codec.
//!
//! The patch consumer expects code bodies as two 32-bit words per line:
//!
//! ```text
//! 20123456 000003E7
//! 20123458 00000000
//! ```
//!
//! Database authors write them in all sorts of layouts. [`normalize`] lays
//! out pure-hex lines in that shape and leaves every other line alone, so
//! labels, search directives and `[Amount:...]` placeholders pass through
//! untouched. It is a layout normalizer only; it never interprets the words.

/// Line ending used for output.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line ending used for output.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Hex digits per word.
const WORD_LEN: usize = 8;
/// Appended when a reflowed line ends up with an odd word count.
const FILLER_WORD: &str = "00000000";

/// Normalize a code body into two-words-per-line layout.
///
/// Any line ending style is accepted; output uses [`LINE_ENDING`]. A line is
/// reflowed only if it consists solely of hex digits and whitespace and holds
/// at least two 8-digit words. Everything else is emitted verbatim.
pub fn normalize(text: &str) -> String {
    let unified = unify_line_endings(text);
    let mut out: Vec<String> = Vec::new();
    for line in unified.split('\n') {
        match reflow_line(line) {
            Some(pairs) => out.extend(pairs),
            None => out.push(line.to_string()),
        }
    }
    out.join(LINE_ENDING)
}

/// True if [`normalize`] would only change the line endings of `text`.
pub fn is_normalized(text: &str) -> bool {
    let unified = unify_line_endings(text);
    normalize(&unified) == unified.replace('\n', LINE_ENDING)
}

/// True if the line is made only of hex digits and whitespace and contains
/// at least one 8-digit word.
pub fn is_candidate(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_hexdigit())
        && count_hex_words(trimmed) > 0
}

/// Number of whitespace-delimited runs of exactly eight hex digits.
pub fn count_hex_words(line: &str) -> usize {
    line.split_whitespace()
        .filter(|token| token.len() == WORD_LEN && token.chars().all(|c| c.is_ascii_hexdigit()))
        .count()
}

fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reflow one line, or `None` if it must be kept as written.
///
/// The threshold counts the words actually written on the line, not the
/// chunks produced after padding, so `426F7800 1122` stays verbatim.
fn reflow_line(line: &str) -> Option<Vec<String>> {
    if !is_candidate(line) || count_hex_words(line) < 2 {
        return None;
    }

    let digits: Vec<char> = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut words: Vec<String> = digits
        .chunks(WORD_LEN)
        .map(|chunk| {
            let mut word: String = chunk.iter().collect();
            while word.len() < WORD_LEN {
                word.push('0');
            }
            word
        })
        .collect();
    if words.len() % 2 == 1 {
        words.push(FILLER_WORD.to_string());
    }

    Some(words.chunks(2).map(|pair| pair.join(" ")).collect())
}

#[cfg(test)]
#[path = "tests/reflow_tests.rs"]
mod tests;
