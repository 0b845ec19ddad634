//! # Tweet Record
//!
//! Tweets have a declared schema but no HTTP operation behind them yet; every
//! tweet endpoint answers 501. The shape is validated by `schema::tweet` so
//! the contract is pinned down before the write path exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// A single tweet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    /// Unique tweet identifier
    pub tweet_id: Uuid,

    /// Tweet body, 1-280 characters
    pub content: String,

    /// Creation timestamp, defaults to now when the input omits it
    pub created_at: DateTime<Utc>,

    /// Set on edit, absent otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Author, in public shape (no password material)
    pub created_by: User,
}
