//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the registration store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The artifact cannot be opened for read+write.
    #[error("user store unavailable: {0}")]
    Unavailable(String),

    /// The artifact's contents do not deserialize as the expected sequence.
    #[error("user store corrupt: {0}")]
    Corrupt(String),

    /// A record with the same unique field is already registered.
    #[error("a user with this {field} is already registered")]
    Duplicate { field: &'static str },

    /// No record with the requested id exists.
    #[error("user not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_the_field() {
        let err = StoreError::Duplicate { field: "email" };
        assert!(err.to_string().contains("email"));
    }
}
