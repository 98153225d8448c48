//! Field-level validation for request payloads.
//!
//! Violations are collected rather than short-circuited, so a single response can name every
//! offending field. Kinds and messages use pydantic's wording ("string_too_short",
//! "Input should be greater than 0"), which existing API clients already understand.

use serde::Serialize;

/// One offending input, addressed by its location (`["body", "price"]`, `["path", "product_id"]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<String>,
    pub msg: String,
}

/// Every violation found in one request.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{} invalid field(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report holding exactly one violation.
    pub fn single(loc: &[&str], kind: &str, msg: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(loc, kind, msg);
        errors
    }

    pub fn push(&mut self, loc: &[&str], kind: &str, msg: impl Into<String>) {
        self.violations.push(FieldViolation {
            kind: kind.to_string(),
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub(crate) fn check_length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            let unit = if min == 1 { "character" } else { "characters" };
            self.push(
                &["body", field],
                "string_too_short",
                format!("String should have at least {min} {unit}"),
            );
        } else if len > max {
            self.push(
                &["body", field],
                "string_too_long",
                format!("String should have at most {max} characters"),
            );
        }
    }

    pub(crate) fn check_positive(&mut self, field: &str, value: f64) {
        // NaN fails the comparison and is rejected too
        if !(value > 0.0) {
            self.push(&["body", field], "greater_than", "Input should be greater than 0");
        }
    }

    pub(crate) fn check_quantity(&mut self, field: &str, value: i64) {
        if value < 0 {
            self.push(
                &["body", field],
                "greater_than_equal",
                "Input should be greater than or equal to 0",
            );
        }
    }

    pub(crate) fn check_not_null(&mut self, field: &str, kind: &str, msg: &str) {
        self.push(&["body", field], kind, msg);
    }
}

/// Implemented by every request payload that has field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}
