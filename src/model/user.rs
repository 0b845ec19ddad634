//! # User Records
//!
//! Three shapes of the same user, one per trust boundary:
//!
//! - [`User`] is the public shape returned by the API. It never carries a
//!   password in any form.
//! - [`Registration`] is the validator's output for `POST /signup`: the public
//!   shape plus the plaintext password, which lives only long enough to be
//!   hashed.
//! - [`StoredUser`] is what the artifact persists: the public fields plus the
//!   Argon2id password hash.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public user shape. This is the only user type that crosses the HTTP
/// boundary outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub user_id: Uuid,

    /// User's email address (unique)
    pub email: String,

    /// First name, 1-50 characters
    pub first_name: String,

    /// Last name, 1-50 characters
    pub last_name: String,

    /// Calendar date of birth; absent means unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

/// Validator-approved registration input.
///
/// Holds the plaintext password between validation and hashing. It is never
/// serialized; the store only ever sees [`StoredUser`].
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub password: String,
}

/// Persisted user record.
///
/// `user_id` serializes as its canonical hyphenated string and `birth_date`
/// as `YYYY-MM-DD`, so the artifact stays a plain JSON array of objects with
/// string-valued fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Argon2id hash (never plaintext)
    pub password_hash: String,
}

impl StoredUser {
    /// Build a persisted record from a validated registration and its hash.
    pub fn new(user: User, password_hash: String) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
            password_hash,
        }
    }

    /// The public shape of this record, minus the hash.
    pub fn to_public(&self) -> User {
        User {
            user_id: self.user_id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            user_id: Uuid::new_v4(),
            email: "jeanneg@ntf.com".to_string(),
            first_name: "Jeanne".to_string(),
            last_name: "Goursaud".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1996, 4, 4),
        }
    }

    #[test]
    fn test_stored_user_serializes_ids_and_dates_as_strings() {
        let user = sample_user();
        let stored = StoredUser::new(user.clone(), "$argon2id$fake".to_string());

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["user_id"], user.user_id.to_string());
        assert_eq!(json["birth_date"], "1996-04-04");
    }

    #[test]
    fn test_public_shape_has_no_password_material() {
        let stored = StoredUser::new(sample_user(), "$argon2id$fake".to_string());
        let public = stored.to_public();

        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_absent_birth_date_is_omitted() {
        let mut user = sample_user();
        user.birth_date = None;

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("birth_date").is_none());
    }

    #[test]
    fn test_stored_user_round_trips_through_artifact_form() {
        let stored = StoredUser::new(sample_user(), "$argon2id$fake".to_string());
        let text = serde_json::to_string(&vec![stored.clone()]).unwrap();

        let back: Vec<StoredUser> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].user_id, stored.user_id);
        assert_eq!(back[0].password_hash, stored.password_hash);
    }
}
