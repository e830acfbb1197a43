use super::*;

fn meta(line: &str) -> Option<(MetadataKind, String)> {
    try_parse_metadata(line).map(|m| (m.kind, m.value))
}

#[test]
fn sigil_forms() {
    assert_eq!(
        meta("^1 = Hash: 0xDEADBEEF"),
        Some((MetadataKind::Hash, "0xDEADBEEF".to_string()))
    );
    assert_eq!(
        meta("^1 DEADBEEF"),
        Some((MetadataKind::Hash, "DEADBEEF".to_string()))
    );
    assert_eq!(
        meta("^2 = GameID: SLUS-20312  "),
        Some((MetadataKind::GameId, "SLUS-20312".to_string()))
    );
    assert_eq!(
        meta("^2 SLES-50003"),
        Some((MetadataKind::GameId, "SLES-50003".to_string()))
    );
}

#[test]
fn sigil_labels_are_case_insensitive() {
    assert_eq!(
        meta("^1 = HASH: abc"),
        Some((MetadataKind::Hash, "abc".to_string()))
    );
    assert_eq!(
        meta("^2 = gameid: SCUS-97113"),
        Some((MetadataKind::GameId, "SCUS-97113".to_string()))
    );
}

#[test]
fn keyword_forms() {
    assert_eq!(
        meta("Hash: DEADBEEF"),
        Some((MetadataKind::Hash, "DEADBEEF".to_string()))
    );
    assert_eq!(
        meta("  hash :  DEADBEEF  "),
        Some((MetadataKind::Hash, "DEADBEEF".to_string()))
    );
    assert_eq!(
        meta("GAMEID: SLUS-20312"),
        Some((MetadataKind::GameId, "SLUS-20312".to_string()))
    );
}

#[test]
fn sigil_takes_priority_over_label() {
    // `^2` decides the kind even though the label says Hash
    assert_eq!(
        meta("^2 Hash: 1234"),
        Some((MetadataKind::GameId, "Hash: 1234".to_string()))
    );
}

#[test]
fn non_metadata_lines() {
    assert_eq!(meta(""), None);
    assert_eq!(meta("    "), None);
    assert_eq!(meta("Hash:"), None);
    assert_eq!(meta("Hash:    "), None);
    assert_eq!(meta("^1"), None);
    assert_eq!(meta("20123456 000003E7"), None);
    assert_eq!(meta("+Infinite HP"), None);
    assert_eq!(meta("The Hash: is here"), None);
}

#[test]
fn credits_with_role() {
    let credit = try_parse_credit("%Credits: Jane Doe : Testing").unwrap();
    assert_eq!(credit.name, "Jane Doe");
    assert_eq!(credit.role.as_deref(), Some("Testing"));
}

#[test]
fn credits_without_role() {
    let credit = try_parse_credit("%Credits: John").unwrap();
    assert_eq!(credit.name, "John");
    assert_eq!(credit.role, None);

    let credit = try_parse_credit("%credits: John: N/A").unwrap();
    assert_eq!(credit.role, None);

    let credit = try_parse_credit("%CREDITS:John:").unwrap();
    assert_eq!(credit.name, "John");
    assert_eq!(credit.role, None);
}

#[test]
fn credits_role_keeps_later_colons() {
    let credit = try_parse_credit("%Credits: Kim: Ported: PAL").unwrap();
    assert_eq!(credit.name, "Kim");
    assert_eq!(credit.role.as_deref(), Some("Ported: PAL"));
}

#[test]
fn credits_rejects_empty_name() {
    assert!(try_parse_credit("%Credits:").is_none());
    assert!(try_parse_credit("%Credits:   : Testing").is_none());
    assert!(try_parse_credit("Credits: John").is_none());
}
