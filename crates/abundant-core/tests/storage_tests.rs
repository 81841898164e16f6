// Rust guideline compliant 2026-10-19

//! Integration tests for the storage module.
//!
//! These tests validate issue files on disk and the prefix index built from
//! their names.

use abundant_core::{Error, Issue, PrefixIndex, Storage};
use std::fs;
use tempfile::TempDir;

fn storage() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("issues");
    fs::create_dir(&dir).expect("Failed to create issues dir");
    let storage = Storage::new(dir).expect("Failed to create storage");
    (temp_dir, storage)
}

#[test]
fn test_empty_directory_has_no_issues() {
    let (_temp_dir, storage) = storage();
    assert!(storage.ids().unwrap().is_empty());
    assert!(storage.load_all().unwrap().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join("absent")).unwrap();
    assert!(matches!(storage.ids(), Err(Error::Io(_))));
}

#[test]
fn test_issue_file_is_pretty_json() {
    let (_temp_dir, storage) = storage();
    let mut issue = Issue::new("Crash on start".to_string(), Some("jane".to_string()), 10, 0);
    issue.severity = Some("major".to_string());
    storage.save(&issue).unwrap();

    let content = fs::read_to_string(storage.path_for(&issue.id)).unwrap();
    assert!(content.contains("\n  \"title\": \"Crash on start\""));
    assert!(!storage.path_for(&issue.id).with_extension("issue.tmp").exists());
}

#[test]
fn test_hand_written_issue_without_id_takes_file_stem() {
    let (_temp_dir, storage) = storage();
    fs::write(
        storage.path_for("0badc0de"),
        r#"{"title": "Written by hand", "creation_date": 5}"#,
    )
    .unwrap();

    let issue = storage.load("0badc0de").unwrap();
    assert_eq!(issue.id, "0badc0de");
    assert_eq!(issue.title(), "Written by hand");
}

#[test]
fn test_ids_feed_prefix_index() {
    let (_temp_dir, storage) = storage();
    let first = Issue::new("First".to_string(), None, 1, 0);
    let second = Issue::new("Second".to_string(), None, 2, 0);
    storage.save_all(&[&first, &second]).unwrap();

    let index = PrefixIndex::from_items(storage.ids().unwrap());
    assert_eq!(index.len(), 2);
    for issue in [&first, &second] {
        let unique = index.shortest_unique_prefix(&issue.id).unwrap();
        assert_eq!(index.lookup(unique).unwrap(), issue.id);
    }
}

#[test]
fn test_save_overwrites_previous_version() {
    let (_temp_dir, storage) = storage();
    let mut issue = Issue::new("Draft".to_string(), None, 1, 0);
    storage.save(&issue).unwrap();
    issue.status = Some("fixed".to_string());
    storage.save(&issue).unwrap();

    assert_eq!(storage.ids().unwrap().len(), 1);
    assert_eq!(storage.load(&issue.id).unwrap().status.as_deref(), Some("fixed"));
}

#[test]
fn test_save_respects_held_lock() {
    use fs2::FileExt;

    let (_temp_dir, storage) = storage();
    let issue = Issue::new("Locked out".to_string(), None, 1, 0);
    let lock_path = storage.dir().with_extension("lock");
    let held = fs::File::create(&lock_path).expect("Failed to create lock file");
    held.lock_exclusive().expect("Failed to take lock");

    assert!(storage.save(&issue).is_err());
    assert!(storage.save_all(&[&issue]).is_err());
    assert!(storage.ids().unwrap().is_empty());

    held.unlock().expect("Failed to release lock");
    storage.save(&issue).unwrap();
    assert_eq!(storage.ids().unwrap(), vec![issue.id]);
}
