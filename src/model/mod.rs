//! # Data Model
//!
//! Record types shared by the validator, the store, and the HTTP surface.

pub mod tweet;
pub mod user;

pub use tweet::Tweet;
pub use user::{Registration, StoredUser, User};
