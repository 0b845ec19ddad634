//! # HTTP API
//!
//! Axum surface over the validator and the registration store. Declared
//! endpoints without behavior answer 501 instead of pretending to succeed.

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{routes, AppState};
pub use server::HttpServer;
