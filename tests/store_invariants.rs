//! Store Invariant Tests
//!
//! The read-modify-write cycle over the artifact must never lose a record:
//! - concurrent appends serialize behind the single-writer lock, so racing
//!   registrations all land in the collection
//! - the collection never shrinks across a successful call
//! - corruption and unavailability are explicit failures, never empty reads

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use tempfile::TempDir;
use uuid::Uuid;

use chirpd::model::{StoredUser, User};
use chirpd::store::{JsonFileStore, StoreError, UserStore};

// =============================================================================
// Test Utilities
// =============================================================================

fn stored(email: &str) -> StoredUser {
    StoredUser::new(
        User {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: "Jeanne".to_string(),
            last_name: "Goursaud".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1996, 4, 4),
        },
        "$argon2id$fake".to_string(),
    )
}

// =============================================================================
// Lost-Update Race
// =============================================================================

/// Two registrations racing from an empty store must both survive.
#[test]
fn test_two_concurrent_registrations_both_persist() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::open(dir.path().join("users.json")).unwrap());

    let handles: Vec<_> = ["left@ntf.com", "right@ntf.com"]
        .into_iter()
        .map(|email| {
            let store = Arc::clone(&store);
            let user = stored(email);
            thread::spawn(move || store.append(user).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.list().unwrap().len(), 2);
}

/// Same property under heavier contention.
#[test]
fn test_many_concurrent_registrations_all_persist() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::open(dir.path().join("users.json")).unwrap());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            let user = stored(&format!("user{}@ntf.com", i));
            thread::spawn(move || store.append(user).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let users = store.list().unwrap();
    assert_eq!(users.len(), 16);

    // Every record is distinct; nothing was overwritten by a racing write.
    let mut emails: Vec<_> = users.iter().map(|u| u.email.clone()).collect();
    emails.sort();
    emails.dedup();
    assert_eq!(emails.len(), 16);
}

// =============================================================================
// Collection Never Shrinks
// =============================================================================

#[test]
fn test_failed_append_leaves_collection_intact() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("users.json")).unwrap();

    let first = store.append(stored("keep@ntf.com")).unwrap();

    let mut duplicate = stored("other@ntf.com");
    duplicate.user_id = first.user_id;
    assert!(matches!(
        store.append(duplicate),
        Err(StoreError::Duplicate { .. })
    ));

    let users = store.list().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "keep@ntf.com");
}

#[test]
fn test_reopen_preserves_every_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        for i in 0..5 {
            store.append(stored(&format!("user{}@ntf.com", i))).unwrap();
        }
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.list().unwrap().len(), 5);
}

// =============================================================================
// Explicit Failure Modes
// =============================================================================

#[test]
fn test_corruption_is_never_an_empty_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let store = JsonFileStore::open(&path).unwrap();
    store.append(stored("jeanneg@ntf.com")).unwrap();

    std::fs::write(&path, r#"{"not": "a sequence"}"#).unwrap();

    assert!(matches!(store.list(), Err(StoreError::Corrupt(_))));
}

#[test]
fn test_missing_artifact_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let store = JsonFileStore::open(&path).unwrap();

    std::fs::remove_file(&path).unwrap();

    assert!(matches!(store.list(), Err(StoreError::Unavailable(_))));
}

#[test]
fn test_unwritable_location_is_unavailable_at_open() {
    let dir = TempDir::new().unwrap();
    // Parent path is a file, so the data directory cannot be created.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let result = JsonFileStore::open(blocker.join("users.json"));
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
