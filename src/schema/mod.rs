//! # Schema Validation
//!
//! Declarative shape checks for inbound payloads. Each field constraint is a
//! small value validator in `fields`; record validators combine them with an
//! explicit call list and collect every violation instead of stopping at the
//! first.
//!
//! Validation is deterministic and side-effect free: the same payload always
//! yields the same verdict, and nothing is written before a verdict exists.

pub mod errors;
pub mod fields;
pub mod tweet;
pub mod user;

pub use errors::{ValidationError, ValidationResult, Violation};
pub use tweet::validate_tweet;
pub use user::validate_registration;
