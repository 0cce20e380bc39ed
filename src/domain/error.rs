use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Duplicate member: {email}")]
    DuplicateMember { email: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn duplicate_member(email: impl Into<String>) -> Self {
        Self::DuplicateMember {
            email: email.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is the duplicate-email business rule violation
    pub fn is_duplicate_member(&self) -> bool {
        matches!(self, Self::DuplicateMember { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_member_error() {
        let error = DomainError::duplicate_member("a@b.com");
        assert_eq!(error.to_string(), "Duplicate member: a@b.com");
        assert!(error.is_duplicate_member());
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("connection lost");
        assert_eq!(error.to_string(), "Storage error: connection lost");
        assert!(!error.is_duplicate_member());
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Invalid message bundle");
        assert_eq!(error.to_string(), "Configuration error: Invalid message bundle");
    }
}
