//! # Routes
//!
//! The full declared surface. Only `GET /` and `POST /signup` have behavior;
//! every other handler answers 501 by construction so a caller can tell a
//! missing feature from an empty result.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::auth::crypto::hash_password;
use crate::model::{StoredUser, User};
use crate::observability::{Logger, Severity};
use crate::schema::validate_registration;
use crate::store::UserStore;

use super::errors::{ApiError, ApiResult};

/// Shared API state.
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// Build the router over the given state.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/users", get(show_all_users))
        .route(
            "/users/:user_id",
            get(show_user).put(update_user).delete(delete_user),
        )
        .route("/post", post(post_tweet))
        .route(
            "/tweets/:tweet_id",
            get(show_tweet).put(update_tweet).delete(delete_tweet),
        )
        .with_state(state)
}

/// Fixed acknowledgement payload, independent of any stored state.
async fn home() -> Json<Value> {
    Json(json!({ "Twitter API": "Working!" }))
}

/// Register a user: validate, hash the password, append, echo the public
/// shape back with creation semantics.
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let registration = validate_registration(&body)?;
    let password_hash = hash_password(&registration.password)?;

    let stored = state
        .store
        .append(StoredUser::new(registration.user, password_hash))?;

    Logger::log(
        Severity::Info,
        "user_registered",
        &[("user_id", &stored.user_id.to_string())],
    );

    Ok((StatusCode::CREATED, Json(stored.to_public())))
}

// Declared endpoints with no behavior yet. Each one names itself so the 501
// body says which operation is absent.

async fn login() -> ApiError {
    ApiError::NotImplemented("login")
}

async fn show_all_users() -> ApiError {
    ApiError::NotImplemented("show_all_users")
}

async fn show_user() -> ApiError {
    ApiError::NotImplemented("show_user")
}

async fn update_user() -> ApiError {
    ApiError::NotImplemented("update_user")
}

async fn delete_user() -> ApiError {
    ApiError::NotImplemented("delete_user")
}

async fn post_tweet() -> ApiError {
    ApiError::NotImplemented("post_tweet")
}

async fn show_tweet() -> ApiError {
    ApiError::NotImplemented("show_tweet")
}

async fn update_tweet() -> ApiError {
    ApiError::NotImplemented("update_tweet")
}

async fn delete_tweet() -> ApiError {
    ApiError::NotImplemented("delete_tweet")
}
