//! Repository behavior over the in-memory backend.

use std::sync::Arc;
use ubinote_core::{Error, MemoryStorage, NoteRepository, StorageWrite};

fn repo() -> (Arc<MemoryStorage>, NoteRepository) {
    let storage = Arc::new(MemoryStorage::new());
    let repo = NoteRepository::new(storage.clone(), "ubinote");
    (storage, repo)
}

/// Key shape: `ubinote/YYYYMMDD_HHMMSS_<sanitized>.md`
fn assert_key_shape(key: &str, want_title_part: &str) {
    let rest = key.strip_prefix("ubinote/").expect("prefix");
    let stem = rest.strip_suffix(".md").expect("extension");
    let (date, rest) = stem.split_at(8);
    assert!(date.chars().all(|c| c.is_ascii_digit()), "date part: {date}");
    let (sep, rest) = rest.split_at(1);
    assert_eq!(sep, "_");
    let (time, rest) = rest.split_at(6);
    assert!(time.chars().all(|c| c.is_ascii_digit()), "time part: {time}");
    assert_eq!(rest, format!("_{want_title_part}"));
}

#[tokio::test]
async fn create_list_get_delete_scenario() {
    let (_storage, repo) = repo();

    let key = repo
        .save("  Hello, World!! ", "note body", None)
        .await
        .unwrap();
    assert_key_shape(&key, "Hello_World");

    let notes = repo.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].key, key);
    assert_eq!(notes[0].title, "Hello World");
    assert_eq!(notes[0].size, "note body".len() as u64);

    let note = repo.get(&key).await.unwrap();
    assert_eq!(note.content, "note body");
    assert_eq!(note.title, "Hello World");

    repo.delete(&key).await.unwrap();
    let err = repo.get(&key).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_sorts_newest_first() {
    let (_storage, repo) = repo();

    // MemoryStorage stamps with Utc::now(); writes in sequence produce
    // non-decreasing timestamps, so the latest write must come first.
    let k1 = repo.save("first", "1", None).await.unwrap();
    let _k2 = repo.save("second", "2", None).await.unwrap();
    let _k3 = repo.save("third", "3", None).await.unwrap();
    // Touch the first note again so it is unambiguously the most recent.
    repo.save("first", "1 again", Some(&k1)).await.unwrap();

    let notes = repo.list().await.unwrap();
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].key, k1);
    for pair in notes.windows(2) {
        assert!(pair[0].last_modified >= pair[1].last_modified);
    }
}

#[tokio::test]
async fn update_preserves_key_and_refreshes_metadata() {
    let (_storage, repo) = repo();

    let key = repo.save("draft", "v1", None).await.unwrap();
    let before = repo.get(&key).await.unwrap();

    let key_after = repo.save("ignored title", "v2", Some(&key)).await.unwrap();
    assert_eq!(key_after, key);

    let after = repo.get(&key).await.unwrap();
    assert_eq!(after.content, "v2");
    assert!(after.last_modified >= before.last_modified);
}

#[tokio::test]
async fn get_and_delete_distinguish_not_found() {
    let (_storage, repo) = repo();

    let err = repo.get("ubinote/20250101_000000_ghost.md").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = repo
        .delete("ubinote/20250101_000000_ghost.md")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    // Double delete: second one reports NotFound, not success
    let key = repo.save("t", "c", None).await.unwrap();
    repo.delete(&key).await.unwrap();
    let err = repo.delete(&key).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_filters_foreign_objects() {
    let (storage, repo) = repo();

    repo.save("real note", "body", None).await.unwrap();
    // Foreign objects sharing the prefix: wrong extension, no extension
    storage
        .put("ubinote/stray.txt", b"not a note", "text/plain")
        .await
        .unwrap();
    storage
        .put("ubinote/20250101_000000_binary", b"\x00", "application/octet-stream")
        .await
        .unwrap();

    let notes = repo.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes.iter().all(|n| n.key.ends_with(".md")));
}

#[tokio::test]
async fn list_ignores_other_prefixes() {
    let (storage, repo) = repo();

    storage
        .put("elsewhere/20250101_000000_note.md", b"x", "text/markdown")
        .await
        .unwrap();
    repo.save("mine", "y", None).await.unwrap();

    let notes = repo.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "mine");
}

#[tokio::test]
async fn save_stores_empty_body_when_invoked_directly() {
    // Emptiness validation is a boundary concern, not a storage invariant.
    let (_storage, repo) = repo();
    let key = repo.save("empty", "", None).await.unwrap();
    let note = repo.get(&key).await.unwrap();
    assert_eq!(note.content, "");
}

#[tokio::test]
async fn non_utf8_body_is_backend_error() {
    let (storage, repo) = repo();
    storage
        .put("ubinote/20250101_000000_bad.md", &[0xff, 0xfe], "text/markdown")
        .await
        .unwrap();

    let err = repo.get("ubinote/20250101_000000_bad.md").await.unwrap_err();
    assert!(matches!(err, Error::Backend(_)));
}

#[tokio::test]
async fn empty_key_is_rejected_before_backend() {
    let (_storage, repo) = repo();
    assert!(matches!(repo.get("").await.unwrap_err(), Error::InvalidKey(_)));
    assert!(matches!(repo.delete("").await.unwrap_err(), Error::InvalidKey(_)));
    assert!(matches!(
        repo.save("t", "c", Some("")).await.unwrap_err(),
        Error::InvalidKey(_)
    ));
}
