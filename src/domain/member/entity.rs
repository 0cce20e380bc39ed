//! Member entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Member identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    /// Generate a new random member ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    /// Unique login email
    email: String,
    name: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    registered_at: DateTime<Utc>,
}

impl Member {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: MemberId::generate(),
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            registered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new("a@b.com", "A", "$argon2id$hash");

        assert_eq!(member.email(), "a@b.com");
        assert_eq!(member.name(), "A");
        assert!(member.registered_at() <= Utc::now());
    }

    #[test]
    fn test_ids_are_unique() {
        let first = Member::new("a@b.com", "A", "h");
        let second = Member::new("c@d.com", "C", "h");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let member = Member::new("a@b.com", "A", "secret_hash");
        let json = serde_json::to_string(&member).unwrap();

        assert!(json.contains("a@b.com"));
        assert!(!json.contains("secret_hash"));
    }
}
