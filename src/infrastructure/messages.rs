//! Message bundle backed by built-in defaults and an optional TOML file

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::registration::MessageSource;
use crate::domain::DomainError;

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("required", "Required field."),
    ("bad.email", "Email is not valid."),
    ("duplicate.email", "This email is already registered."),
    ("nomatch.confirmPassword", "Password and confirmation do not match."),
    ("too_long", "Value is too long."),
    ("bind", "The submitted form could not be read."),
];

/// In-memory message bundle
#[derive(Debug, Clone)]
pub struct StaticMessageSource {
    messages: HashMap<String, String>,
}

impl StaticMessageSource {
    /// Bundle containing only the built-in messages
    pub fn new() -> Self {
        Self {
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(code, text)| (code.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// Add or replace a message
    pub fn with_message(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(code.into(), text.into());
        self
    }

    /// Overlay messages parsed from a TOML document of `"code" = "text"` pairs
    pub fn merge_toml(mut self, content: &str) -> Result<Self, DomainError> {
        let overrides: HashMap<String, String> = toml::from_str(content)
            .map_err(|e| DomainError::configuration(format!("Invalid message bundle: {}", e)))?;

        self.messages.extend(overrides);
        Ok(self)
    }

    /// Load the defaults overlaid with the bundle at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read message bundle '{}': {}",
                path.display(),
                e
            ))
        })?;

        let source = Self::new().merge_toml(&content)?;
        info!(path = %path.display(), "Loaded message bundle");

        Ok(source)
    }
}

impl Default for StaticMessageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSource for StaticMessageSource {
    fn message(&self, code: &str) -> Option<String> {
        self.messages.get(code).cloned()
    }
}
