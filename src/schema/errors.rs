//! # Validation Errors
//!
//! A validation failure enumerates every violated constraint, field by field,
//! so the caller sees the whole verdict in one response.

use std::fmt;

use serde::Serialize;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path (e.g. "created_by.email")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn length_out_of_bounds(field: impl Into<String>, min: usize, max: usize, len: usize) -> Self {
        Self::new(
            field,
            format!("length between {} and {}", min, max),
            format!("length {}", len),
        )
    }

    pub fn malformed(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(field, expected, "malformed value")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, expected, actual)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Schema violation verdict: one or more field violations.
#[derive(Debug, Clone)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Build a verdict from collected violations.
    ///
    /// Callers must only construct this with a non-empty list; an empty list
    /// is not a failure.
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn single(violation: Violation) -> Self {
        Self::new(vec![violation])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// True if some violation names the given field.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
