//! # File-Backed Store
//!
//! Persists the user collection as one JSON array in a flat file. Two
//! disciplines make the naive read-modify-write cycle safe:
//!
//! - a single-writer mutex held across the whole cycle, so concurrent
//!   appends serialize instead of losing each other's records;
//! - the rewrite lands in a temp file that is renamed over the artifact, so
//!   an interrupted write never leaves the collection shorter than before.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uuid::Uuid;

use crate::model::StoredUser;

use super::errors::{StoreError, StoreResult};
use super::{check_duplicate, UserStore};

/// JSON-file-backed user store.
pub struct JsonFileStore {
    /// Path to the artifact
    path: PathBuf,
    /// Serializes every read-modify-write cycle
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store at `path`, initializing an empty artifact if none
    /// exists. Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the artifact cannot be created
    /// or opened for read+write.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Unavailable(format!(
                        "failed to create data directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Initialize a new artifact to the empty sequence.
        if !path.exists() {
            fs::write(&path, b"[]").map_err(|e| {
                StoreError::Unavailable(format!(
                    "failed to initialize artifact {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }

        // Verify the artifact is actually readable and writable up front.
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| {
                StoreError::Unavailable(format!(
                    "failed to open artifact {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the artifact this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deserializes the whole collection. An empty artifact reads as the
    /// empty sequence; unparseable contents are a corruption failure, never
    /// silently discarded.
    fn read_all(&self) -> StoreResult<Vec<StoredUser>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            StoreError::Unavailable(format!(
                "failed to read artifact {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corrupt(format!("artifact is not a user sequence: {}", e)))
    }

    /// Rewrites the whole collection through a temp file + rename.
    fn write_all(&self, users: &[StoredUser]) -> StoreResult<()> {
        let serialized = serde_json::to_vec(users)
            .map_err(|e| StoreError::Corrupt(format!("failed to serialize collection: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)
                .map_err(|e| {
                    StoreError::Unavailable(format!(
                        "failed to open temp artifact {}: {}",
                        tmp_path.display(),
                        e
                    ))
                })?;
            tmp.write_all(&serialized)
                .map_err(|e| StoreError::Unavailable(format!("failed to write artifact: {}", e)))?;
            tmp.sync_all()
                .map_err(|e| StoreError::Unavailable(format!("failed to sync artifact: {}", e)))?;
        }

        fs::rename(&tmp_path, &self.path)
            .map_err(|e| StoreError::Unavailable(format!("failed to replace artifact: {}", e)))
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("write lock poisoned".to_string()))
    }
}

impl UserStore for JsonFileStore {
    fn append(&self, user: StoredUser) -> StoreResult<StoredUser> {
        let _guard = self.lock()?;

        let mut users = self.read_all()?;
        check_duplicate(&users, &user)?;
        users.push(user.clone());
        self.write_all(&users)?;

        Ok(user)
    }

    fn list(&self) -> StoreResult<Vec<StoredUser>> {
        let _guard = self.lock()?;
        self.read_all()
    }

    fn get(&self, user_id: Uuid) -> StoreResult<Option<StoredUser>> {
        let _guard = self.lock()?;
        Ok(self.read_all()?.into_iter().find(|u| u.user_id == user_id))
    }

    fn update(&self, user: StoredUser) -> StoreResult<StoredUser> {
        let _guard = self.lock()?;

        let mut users = self.read_all()?;
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => *existing = user.clone(),
            None => return Err(StoreError::NotFound),
        }
        self.write_all(&users)?;

        Ok(user)
    }

    fn delete(&self, user_id: Uuid) -> StoreResult<()> {
        let _guard = self.lock()?;

        let mut users = self.read_all()?;
        let len_before = users.len();
        users.retain(|u| u.user_id != user_id);

        if users.len() == len_before {
            return Err(StoreError::NotFound);
        }
        self.write_all(&users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use chrono::NaiveDate;
    use tempfile::TempDir;

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

    fn open_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("users.json")).unwrap()
    }

    #[test]
    fn test_open_initializes_empty_artifact() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_registration_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.append(stored("first@ntf.com")).unwrap();
        store.append(stored("second@ntf.com")).unwrap();

        let users = store.list().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "first@ntf.com");
        assert_eq!(users[1].email, "second@ntf.com");
    }

    #[test]
    fn test_collection_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let user = stored("jeanneg@ntf.com");
        {
            let store = open_store(&dir);
            store.append(user.clone()).unwrap();
        }

        let store = open_store(&dir);
        let users = store.list().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, user.user_id);
    }

    #[test]
    fn test_artifact_is_json_array_of_string_fields() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let user = store.append(stored("jeanneg@ntf.com")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let entry = &raw.as_array().unwrap()[0];
        assert_eq!(entry["user_id"], user.user_id.to_string());
        assert_eq!(entry["birth_date"], "1996-04-04");
    }

    #[test]
    fn test_duplicate_user_id_rejected() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let user = store.append(stored("one@ntf.com")).unwrap();
        let mut clone = stored("two@ntf.com");
        clone.user_id = user.user_id;

        assert!(matches!(
            store.append(clone),
            Err(StoreError::Duplicate { field: "user_id" })
        ));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.append(stored("same@ntf.com")).unwrap();
        assert!(matches!(
            store.append(stored("same@ntf.com")),
            Err(StoreError::Duplicate { field: "email" })
        ));
    }

    #[test]
    fn test_corrupt_artifact_is_an_explicit_failure() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.list(), Err(StoreError::Corrupt(_))));
        assert!(matches!(
            store.append(stored("x@ntf.com")),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_unreadable_artifact_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        fs::remove_file(store.path()).unwrap();
        fs::remove_dir_all(dir.path()).unwrap();

        assert!(matches!(store.list(), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_get_update_delete() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let mut user = store.append(stored("jeanneg@ntf.com")).unwrap();

        assert!(store.get(user.user_id).unwrap().is_some());
        assert!(store.get(Uuid::new_v4()).unwrap().is_none());

        user.first_name = "Renamed".to_string();
        store.update(user.clone()).unwrap();
        assert_eq!(
            store.get(user.user_id).unwrap().unwrap().first_name,
            "Renamed"
        );

        store.delete(user.user_id).unwrap();
        assert!(store.get(user.user_id).unwrap().is_none());
        assert!(matches!(store.delete(user.user_id), Err(StoreError::NotFound)));
        assert!(matches!(store.update(user), Err(StoreError::NotFound)));
    }
}
