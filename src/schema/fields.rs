//! # Field Validators
//!
//! One function per field constraint. Each validator pushes into a shared
//! violation list and returns the parsed value on success, so record
//! validators can keep collecting after a failure.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::errors::Violation;

/// Pragmatic email syntax check: one `@`, no whitespace, dotted domain.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Returns the JSON type name for violation messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
pub fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Required string field: present, non-null, string-typed.
pub fn require_str<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a str> {
    match obj.get(path.rsplit('.').next().unwrap_or(path)) {
        None | Some(Value::Null) => {
            out.push(Violation::missing_field(path));
            None
        }
        Some(value) => match value.as_str() {
            Some(s) => Some(s),
            None => {
                out.push(Violation::type_mismatch(path, "string", json_type_name(value)));
                None
            }
        },
    }
}

/// Optional string field: absent and null both mean "not given".
pub fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a str> {
    match obj.get(path.rsplit('.').next().unwrap_or(path)) {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_str() {
            Some(s) => Some(s),
            None => {
                out.push(Violation::type_mismatch(path, "string", json_type_name(value)));
                None
            }
        },
    }
}

/// Character-count bounds check (inclusive on both ends).
pub fn check_length(path: &str, value: &str, min: usize, max: usize, out: &mut Vec<Violation>) -> bool {
    let len = value.chars().count();
    if len < min || len > max {
        out.push(Violation::length_out_of_bounds(path, min, max, len));
        return false;
    }
    true
}

/// Email-address syntax check.
pub fn check_email(path: &str, value: &str, out: &mut Vec<Violation>) -> bool {
    if !email_regex().is_match(value) {
        out.push(Violation::malformed(path, "email-address syntax"));
        return false;
    }
    true
}

/// UUID syntax check; returns the parsed UUID on success.
pub fn check_uuid(path: &str, value: &str, out: &mut Vec<Violation>) -> Option<Uuid> {
    match Uuid::parse_str(value) {
        Ok(id) => Some(id),
        Err(_) => {
            out.push(Violation::malformed(path, "UUID-formatted string"));
            None
        }
    }
}

/// Calendar date check (`YYYY-MM-DD`, no time component).
pub fn check_date(path: &str, value: &str, out: &mut Vec<Violation>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            out.push(Violation::malformed(path, "YYYY-MM-DD date"));
            None
        }
    }
}

/// RFC 3339 timestamp check.
pub fn check_timestamp(path: &str, value: &str, out: &mut Vec<Violation>) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(_) => {
            out.push(Violation::malformed(path, "RFC 3339 timestamp"));
            None
        }
    }
}
