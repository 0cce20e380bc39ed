//! In-memory member repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::member::{Member, MemberRepository};
use crate::domain::DomainError;

/// In-memory implementation of MemberRepository, keyed by email.
///
/// Emails are compared case-insensitively. The existence check and the
/// insert happen under one write lock.
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(&email_key(email)).cloned())
    }

    async fn insert(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;
        let key = email_key(member.email());

        if members.contains_key(&key) {
            return Err(DomainError::duplicate_member(member.email()));
        }

        members.insert(key, member.clone());
        Ok(member)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.members.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(Member::new("a@b.com", "A", "h")).await.unwrap();

        let found = repo.find_by_email("a@b.com").await.unwrap();
        assert_eq!(found.unwrap().name(), "A");
        assert!(repo.find_by_email("x@y.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(Member::new("a@b.com", "A", "h")).await.unwrap();

        let err = repo.insert(Member::new("a@b.com", "B", "h")).await.unwrap_err();
        assert!(err.is_duplicate_member());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(Member::new("A@B.com", "A", "h")).await.unwrap();

        assert!(repo.email_exists("a@b.com").await.unwrap());
        assert!(repo.insert(Member::new("a@b.COM", "B", "h")).await.is_err());
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryMemberRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(Member::new("a@b.com", "A", "h")).await.unwrap();
        repo.insert(Member::new("c@d.com", "C", "h")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
