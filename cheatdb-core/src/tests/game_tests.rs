use super::*;

fn sample_game() -> Game {
    let mut game = Game::new("SLUS-20312", "Sample Game", "/db/Sample Game");

    let mut infinite = CodeGroup::new("Infinite");
    let mut hp = CodeEntry::new("Infinite HP");
    hp.raw = "20123456 000003E7".to_string();
    infinite.codes.push(hp);
    let mut mp = CodeEntry::new("Infinite MP");
    mp.raw = "20123458 [Amount:99:u32:LE]".to_string();
    infinite.codes.push(mp);
    game.groups.push(infinite);

    let mut loose = CodeGroup::ungrouped();
    let mut dup = CodeEntry::new("infinite hp");
    dup.raw = "2012345C 000003E7".to_string();
    dup.note_html = Some("Alternate address".to_string());
    loose.codes.push(dup);
    game.groups.push(loose);

    game.metadata.push(Metadata::new(MetadataKind::Hash, "DEADBEEF"));
    game.metadata.push(Metadata::new(MetadataKind::GameId, "SLUS-20312"));
    game.metadata.push(Metadata::new(MetadataKind::Hash, "CAFEBABE"));
    game
}

#[test]
fn entries_iterate_in_group_order() {
    let game = sample_game();
    let names: Vec<_> = game.entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Infinite HP", "Infinite MP", "infinite hp"]);
    assert_eq!(game.entry_count(), 3);
}

#[test]
fn find_entries_returns_duplicates() {
    let game = sample_game();
    let found = game.find_entries("  INFINITE HP ");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].raw, "20123456 000003E7");
    assert_eq!(found[1].raw, "2012345C 000003E7");
}

#[test]
fn find_group_is_case_insensitive() {
    let game = sample_game();
    assert_eq!(game.find_group("infinite").map(|g| g.codes.len()), Some(2));
    assert!(game.find_group("(ungrouped)").is_some_and(CodeGroup::is_ungrouped));
    assert!(game.find_group("Missing").is_none());
}

#[test]
fn metadata_values_filter_by_kind() {
    let game = sample_game();
    let hashes: Vec<_> = game.metadata_values(MetadataKind::Hash).collect();
    assert_eq!(hashes, vec!["DEADBEEF", "CAFEBABE"]);
    let ids: Vec<_> = game.metadata_values(MetadataKind::GameId).collect();
    assert_eq!(ids, vec!["SLUS-20312"]);
}

#[test]
fn badges_are_computed_lazily_and_cached() {
    let mut game = sample_game();
    assert!(game.entries().all(|e| e.badge_flags.is_none()));

    game.compute_badges();
    let flags: Vec<_> = game.entries().map(|e| e.badge_flags.unwrap()).collect();
    assert_eq!(flags[0], BadgeFlags::default());
    assert!(flags[1].has_mods);
    assert!(flags[2].has_note);
}

#[test]
fn set_note_invalidates_badges() {
    let mut entry = CodeEntry::new("Code");
    entry.raw = "AAAAAAAA".to_string();
    assert!(!entry.badges().has_note);

    entry.set_note_html(Some("Now with a note".to_string()));
    assert!(entry.badge_flags.is_none());
    assert!(entry.badges().has_note);
}

#[test]
fn metadata_serializes_with_file_tags() {
    let json = serde_json::to_string(&Metadata::new(MetadataKind::GameId, "X")).unwrap();
    assert_eq!(json, r#"{"kind":"GameID","value":"X"}"#);
}
