//! Member registration service contract

use async_trait::async_trait;

use super::entity::MemberId;
use crate::domain::registration::RegisterRequest;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Registers members and owns the email-uniqueness rule
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MemberRegisterService: Send + Sync {
    /// Register a member from a validated request.
    ///
    /// Returns `DomainError::DuplicateMember` when the email already exists.
    async fn register(&self, request: &RegisterRequest) -> Result<MemberId, DomainError>;

    /// Number of registered members
    async fn member_count(&self) -> Result<usize, DomainError>;
}
