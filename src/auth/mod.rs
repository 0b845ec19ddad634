//! # Authentication
//!
//! Only the password-at-rest discipline exists today: registration hashes the
//! password before anything is persisted. Login is a declared endpoint with
//! no behavior yet, so credential verification is exercised by tests only.

pub mod crypto;

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Password hashing failed
    #[error("internal error: password hashing failed")]
    HashingFailed,

    /// Stored hash is not a parseable Argon2 hash
    #[error("internal error: stored password hash is malformed")]
    MalformedHash,
}
