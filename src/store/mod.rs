//! # Registration Store
//!
//! Durable home of the user collection. The artifact is a single JSON array
//! of user records; every write deserializes the whole sequence, applies the
//! change, and rewrites it in full behind a single-writer lock, so concurrent
//! registrations cannot lose each other's records.

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryUserStore;

use uuid::Uuid;

use crate::model::StoredUser;

/// Storage abstraction over the persisted user collection.
///
/// `append` is the only operation the HTTP surface currently reaches; the
/// rest exist so the store contract is complete ahead of the endpoints that
/// will use them.
pub trait UserStore: Send + Sync {
    /// Durably append a validated record and echo it back.
    ///
    /// Fails with [`StoreError::Duplicate`] if the collection already holds
    /// the record's `user_id` or `email`.
    fn append(&self, user: StoredUser) -> StoreResult<StoredUser>;

    /// All records, in registration order.
    fn list(&self) -> StoreResult<Vec<StoredUser>>;

    /// Look up one record by id.
    fn get(&self, user_id: Uuid) -> StoreResult<Option<StoredUser>>;

    /// Replace the record with the same `user_id`.
    fn update(&self, user: StoredUser) -> StoreResult<StoredUser>;

    /// Remove the record with the given id.
    fn delete(&self, user_id: Uuid) -> StoreResult<()>;
}

/// Duplicate check shared by the store implementations.
pub(crate) fn check_duplicate(existing: &[StoredUser], candidate: &StoredUser) -> StoreResult<()> {
    if existing.iter().any(|u| u.user_id == candidate.user_id) {
        return Err(StoreError::Duplicate { field: "user_id" });
    }
    if existing.iter().any(|u| u.email == candidate.email) {
        return Err(StoreError::Duplicate { field: "email" });
    }
    Ok(())
}
