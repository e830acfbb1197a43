use cheatdb_patch::{LINE_ENDING, PatchError, PatchItem, write_patch_file};
use std::fs;
use tempfile::TempDir;

#[test]
fn writes_to_explicit_target_without_bom() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("nested").join("out.txt");
    let items = vec![
        PatchItem::new("Infinite HP", "20123456 000003e7"),
        PatchItem::new("Moon Jump", "D0123456 0000FFFF\n20123460 3F800000"),
    ];

    let written = write_patch_file(&items, Some(&target)).unwrap();
    assert_eq!(written, target);

    let bytes = fs::read(&target).unwrap();
    assert!(!bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8(bytes).unwrap();
    let expected = [
        "[Infinite HP]",
        "20123456 000003E7",
        "",
        "[Moon Jump]",
        "D0123456 0000FFFF",
        "20123460 3F800000",
    ]
    .join(LINE_ENDING);
    assert_eq!(text, expected);
}

#[test]
fn overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("out.txt");
    fs::write(&target, "old contents that are longer than the new ones").unwrap();

    write_patch_file(&[PatchItem::new("A", "")], Some(&target)).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "[A]");
}

#[test]
fn empty_patch_is_rejected_and_nothing_is_written() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("empty.txt");

    let result = write_patch_file(&[], Some(&target));
    assert!(matches!(result, Err(PatchError::EmptyPatch)));
    assert!(!target.exists());
}

#[test]
fn default_target_lands_in_temp_dir() {
    let written = write_patch_file(&[PatchItem::new("Temp", "AAAAAAAA BBBBBBBB")], None).unwrap();
    assert!(written.starts_with(std::env::temp_dir()));
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some("txt"));
    let text = fs::read_to_string(&written).unwrap();
    fs::remove_file(&written).unwrap();
    assert!(text.starts_with("[Temp]"));
}

#[test]
fn unwritable_target_surfaces_io_error() {
    let tmp = TempDir::new().unwrap();
    // A directory can't be opened as a file
    let result = write_patch_file(&[PatchItem::new("A", "B")], Some(tmp.path()));
    assert!(matches!(result, Err(PatchError::Io(_))));
}
