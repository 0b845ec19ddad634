//! # User Record Validator
//!
//! Combines the field validators into the registration verdict. All
//! violations are collected before the verdict is returned.

use serde_json::{Map, Value};

use crate::model::{Registration, User};

use super::errors::{ValidationError, ValidationResult, Violation};
use super::fields::{
    check_date, check_email, check_length, check_uuid, json_type_name, make_path, optional_str,
    require_str,
};

/// Password bounds on the registration input.
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 64;

/// Name bounds shared by `first_name` and `last_name`.
pub const NAME_MIN: usize = 1;
pub const NAME_MAX: usize = 50;

/// Validates the public user fields of `obj`, pushing violations under
/// `prefix`. Used both for registration and for embedded authors on tweets.
pub(crate) fn validate_user_fields(
    obj: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<Violation>,
) -> Option<User> {
    let user_id = require_str(obj, &make_path(prefix, "user_id"), out)
        .and_then(|s| check_uuid(&make_path(prefix, "user_id"), s, out));

    let email_path = make_path(prefix, "email");
    let email = require_str(obj, &email_path, out)
        .filter(|s| check_email(&email_path, s, out))
        .map(str::to_string);

    let first_path = make_path(prefix, "first_name");
    let first_name = require_str(obj, &first_path, out)
        .filter(|s| check_length(&first_path, s, NAME_MIN, NAME_MAX, out))
        .map(str::to_string);

    let last_path = make_path(prefix, "last_name");
    let last_name = require_str(obj, &last_path, out)
        .filter(|s| check_length(&last_path, s, NAME_MIN, NAME_MAX, out))
        .map(str::to_string);

    let birth_path = make_path(prefix, "birth_date");
    let birth_date =
        optional_str(obj, &birth_path, out).and_then(|s| check_date(&birth_path, s, out));

    Some(User {
        user_id: user_id?,
        email: email?,
        first_name: first_name?,
        last_name: last_name?,
        birth_date,
    })
}

/// Validates an untyped signup payload into a normalized [`Registration`].
///
/// # Errors
///
/// Returns [`ValidationError`] enumerating every field that is missing, out
/// of bounds, or malformed. The payload is never partially accepted.
pub fn validate_registration(payload: &Value) -> ValidationResult<Registration> {
    let obj = payload.as_object().ok_or_else(|| {
        ValidationError::single(Violation::type_mismatch(
            "$root",
            "object",
            json_type_name(payload),
        ))
    })?;

    let mut out = Vec::new();

    let user = validate_user_fields(obj, "", &mut out);

    let password = require_str(obj, "password", &mut out)
        .filter(|s| check_length("password", s, PASSWORD_MIN, PASSWORD_MAX, &mut out))
        .map(str::to_string);

    if !out.is_empty() {
        return Err(ValidationError::new(out));
    }

    // Both are Some once the violation list is empty.
    match (user, password) {
        (Some(user), Some(password)) => Ok(Registration { user, password }),
        _ => unreachable!("violation-free validation must produce a record"),
    }
}
