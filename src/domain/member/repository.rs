//! Member repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Member;
use crate::domain::DomainError;

/// Repository trait for member storage
#[async_trait]
pub trait MemberRepository: Send + Sync + Debug {
    /// Find a member by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError>;

    /// Store a new member. Fails with `DuplicateMember` when the email is taken.
    async fn insert(&self, member: Member) -> Result<Member, DomainError>;

    /// Count stored members
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
