//! # In-Memory Store
//!
//! Same contract as the file-backed store, minus durability. Used by tests
//! and anywhere a throwaway store is enough.

use std::sync::RwLock;

use uuid::Uuid;

use crate::model::StoredUser;

use super::errors::{StoreError, StoreResult};
use super::{check_duplicate, UserStore};

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<StoredUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn append(&self, user: StoredUser) -> StoreResult<StoredUser> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        check_duplicate(&users, &user)?;
        users.push(user.clone());
        Ok(user)
    }

    fn list(&self) -> StoreResult<Vec<StoredUser>> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(users.clone())
    }

    fn get(&self, user_id: Uuid) -> StoreResult<Option<StoredUser>> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    fn update(&self, user: StoredUser) -> StoreResult<StoredUser> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn delete(&self, user_id: Uuid) -> StoreResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let len_before = users.len();
        users.retain(|u| u.user_id != user_id);

        if users.len() == len_before {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }
}
