//! Single-line classifier for the database markup.
//!
//! Each line maps to exactly one [`Line`] variant. Declarations (`Credit`,
//! `Metadata`) are recorded by the parser and then still treated as body text,
//! so the structural meaning of those lines is [`Line::Text`].

use cheatdb_core::{Credit, Metadata};

use crate::metadata::{try_parse_credit, try_parse_metadata};

/// Keyword that closes the current group, compared with whitespace removed.
const GROUP_END_KEYWORD: &str = "!!groupend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `!Name`
    Group(String),
    /// `!!GroupEnd`
    GroupEnd,
    /// `+Name`
    CodeTitle(String),
    /// `%Credits: Name[: Role]`
    Credit(Credit),
    /// `Hash:`/`GameID:` and their `^1`/`^2` forms
    Metadata(Metadata),
    /// `{` on its own
    NoteOpen,
    /// `}` on its own
    NoteClose,
    /// Anything else
    Text,
}

/// Classify one line (without its line terminator).
pub fn classify(line: &str) -> Line {
    let trimmed = line.trim();

    if is_group_end(trimmed) {
        return Line::GroupEnd;
    }
    if let Some(name) = trimmed.strip_prefix('!') {
        if !name.starts_with('!') {
            let name = name.trim();
            if !name.is_empty() {
                return Line::Group(name.to_string());
            }
        }
    }
    if let Some(name) = trimmed.strip_prefix('+') {
        let name = name.trim();
        if !name.is_empty() {
            return Line::CodeTitle(name.to_string());
        }
    }
    match trimmed {
        "{" => return Line::NoteOpen,
        "}" => return Line::NoteClose,
        _ => {}
    }
    if let Some(credit) = try_parse_credit(line) {
        return Line::Credit(credit);
    }
    if let Some(metadata) = try_parse_metadata(line) {
        return Line::Metadata(metadata);
    }
    Line::Text
}

fn is_group_end(trimmed: &str) -> bool {
    if !trimmed.starts_with('!') {
        return false;
    }
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    compact.eq_ignore_ascii_case(GROUP_END_KEYWORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatdb_core::MetadataKind;

    #[test]
    fn groups_and_codes() {
        assert_eq!(classify("!Infinite Items"), Line::Group("Infinite Items".into()));
        assert_eq!(classify("  ! Padded  "), Line::Group("Padded".into()));
        assert_eq!(classify("+Max Money"), Line::CodeTitle("Max Money".into()));
        assert_eq!(classify("+ Max Money\r"), Line::CodeTitle("Max Money".into()));
    }

    #[test]
    fn group_end_ignores_case_and_whitespace() {
        assert_eq!(classify("!!GroupEnd"), Line::GroupEnd);
        assert_eq!(classify("!!groupend"), Line::GroupEnd);
        assert_eq!(classify("  !! Group End  "), Line::GroupEnd);
        assert_eq!(classify("!!Group\tEND"), Line::GroupEnd);
        assert_eq!(classify("! ! GroupEnd"), Line::GroupEnd);
    }

    #[test]
    fn other_double_bang_lines_are_text() {
        assert_eq!(classify("!!Something"), Line::Text);
        assert_eq!(classify("!!"), Line::Text);
    }

    #[test]
    fn bare_sigils_are_text() {
        assert_eq!(classify("!"), Line::Text);
        assert_eq!(classify("+"), Line::Text);
        assert_eq!(classify("+   "), Line::Text);
    }

    #[test]
    fn note_markers_must_stand_alone() {
        assert_eq!(classify("{"), Line::NoteOpen);
        assert_eq!(classify("  }  "), Line::NoteClose);
        assert_eq!(classify("{MOD}"), Line::Text);
        assert_eq!(classify("{ note"), Line::Text);
    }

    #[test]
    fn declarations() {
        assert_eq!(
            classify("%Credits: Jane Doe : Testing"),
            Line::Credit(Credit::new("Jane Doe", Some("Testing")))
        );
        assert_eq!(
            classify("Hash: DEADBEEF"),
            Line::Metadata(Metadata::new(MetadataKind::Hash, "DEADBEEF"))
        );
    }

    #[test]
    fn plain_text() {
        assert_eq!(classify("20123456 000003E7"), Line::Text);
        assert_eq!(classify(""), Line::Text);
        assert_eq!(classify("[Amount:10:u32:LE]"), Line::Text);
    }
}
