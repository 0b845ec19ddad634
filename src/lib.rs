//! chirpd - a minimal, self-hostable Twitter-like REST API
//!
//! Working surface: a health acknowledgement at `GET /` and validated user
//! registration at `POST /signup` backed by a flat JSON artifact. Every other
//! declared endpoint answers 501 so callers can tell "feature absent" from
//! "empty result".

pub mod api;
pub mod auth;
pub mod cli;
pub mod model;
pub mod observability;
pub mod schema;
pub mod store;
