//! Message resolution for error codes

use std::fmt::Debug;

/// Resolves error codes to display text
pub trait MessageSource: Send + Sync + Debug {
    /// Look up the text for a single, fully qualified code
    fn message(&self, code: &str) -> Option<String>;

    /// Resolve a field error code, trying `code.object.field`, then
    /// `code.field`, then `code`. Falls back to the bare code.
    fn resolve(&self, object: &str, field: Option<&str>, code: &str) -> String {
        message_codes(object, field, code)
            .iter()
            .find_map(|candidate| self.message(candidate))
            .unwrap_or_else(|| code.to_string())
    }
}

/// Candidate codes in lookup order, most specific first
pub fn message_codes(object: &str, field: Option<&str>, code: &str) -> Vec<String> {
    match field {
        Some(field) => vec![
            format!("{}.{}.{}", code, object, field),
            format!("{}.{}", code, field),
            code.to_string(),
        ],
        None => vec![format!("{}.{}", code, object), code.to_string()],
    }
}
