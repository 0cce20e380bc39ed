//! Per-request accumulator of field and global error codes

use serde::Serialize;

/// An error code attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
}

/// Ordered validation outcome for one submission. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: Vec<FieldError>,
    global_errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error code to a field
    pub fn reject_value(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.field_errors.push(FieldError {
            field: field.into(),
            code: code.into(),
        });
    }

    /// Record an error that belongs to the whole object
    pub fn reject(&mut self, code: impl Into<String>) {
        self.global_errors.push(code.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.global_errors.is_empty()
    }

    /// Codes recorded for a field, in the order they were added
    pub fn field_error_codes(&self, field: &str) -> Vec<&str> {
        self.field_errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.code.as_str())
            .collect()
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn global_errors(&self) -> &[String] {
        &self.global_errors
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.global_errors.len()
    }

    /// Append another result's errors after this one's
    pub fn merge(&mut self, other: ValidationResult) {
        self.field_errors.extend(other.field_errors);
        self.global_errors.extend(other.global_errors);
    }
}
