//! # Tweet Record Validator
//!
//! Pins down the tweet contract even though no tweet endpoint is implemented
//! yet. `created_by` is validated with the same public-user field list the
//! registration path uses.

use chrono::Utc;
use serde_json::Value;

use crate::model::Tweet;

use super::errors::{ValidationError, ValidationResult, Violation};
use super::fields::{
    check_length, check_timestamp, check_uuid, json_type_name, optional_str, require_str,
};
use super::user::validate_user_fields;

/// Content bounds for a tweet body.
pub const CONTENT_MIN: usize = 1;
pub const CONTENT_MAX: usize = 280;

/// Validates an untyped tweet payload into a normalized [`Tweet`].
///
/// `created_at` defaults to the current time when absent; `updated_at` stays
/// absent until an edit exists to set it.
pub fn validate_tweet(payload: &Value) -> ValidationResult<Tweet> {
    let obj = payload.as_object().ok_or_else(|| {
        ValidationError::single(Violation::type_mismatch(
            "$root",
            "object",
            json_type_name(payload),
        ))
    })?;

    let mut out = Vec::new();

    let tweet_id =
        require_str(obj, "tweet_id", &mut out).and_then(|s| check_uuid("tweet_id", s, &mut out));

    let content = require_str(obj, "content", &mut out)
        .filter(|s| check_length("content", s, CONTENT_MIN, CONTENT_MAX, &mut out))
        .map(str::to_string);

    let created_at = optional_str(obj, "created_at", &mut out)
        .and_then(|s| check_timestamp("created_at", s, &mut out));

    let updated_at = optional_str(obj, "updated_at", &mut out)
        .and_then(|s| check_timestamp("updated_at", s, &mut out));

    let created_by = match obj.get("created_by") {
        None | Some(Value::Null) => {
            out.push(Violation::missing_field("created_by"));
            None
        }
        Some(value) => match value.as_object() {
            Some(author) => validate_user_fields(author, "created_by", &mut out),
            None => {
                out.push(Violation::type_mismatch(
                    "created_by",
                    "object",
                    json_type_name(value),
                ));
                None
            }
        },
    };

    if !out.is_empty() {
        return Err(ValidationError::new(out));
    }

    match (tweet_id, content, created_by) {
        (Some(tweet_id), Some(content), Some(created_by)) => Ok(Tweet {
            tweet_id,
            content,
            created_at: created_at.unwrap_or_else(Utc::now),
            updated_at,
            created_by,
        }),
        _ => unreachable!("violation-free validation must produce a record"),
    }
}
