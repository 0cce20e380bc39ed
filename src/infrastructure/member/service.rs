//! Member registration service backed by a repository and a password hasher

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::domain::member::{Member, MemberId, MemberRegisterService, MemberRepository};
use crate::domain::registration::RegisterRequest;
use crate::domain::DomainError;

use super::password::PasswordHasher;

#[derive(Debug)]
pub struct MemberService<R: MemberRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: MemberRepository, H: PasswordHasher> MemberService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Look up a member by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        self.repository.find_by_email(email).await
    }
}

#[async_trait]
impl<R: MemberRepository, H: PasswordHasher> MemberRegisterService for MemberService<R, H> {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn register(&self, request: &RegisterRequest) -> Result<MemberId, DomainError> {
        let email = request.email.trim();

        // Skip hashing for known emails; insert re-checks under its own lock
        if self.repository.email_exists(email).await? {
            return Err(DomainError::duplicate_member(email));
        }

        let hasher = Arc::clone(&self.hasher);
        let password = request.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))??;

        let member = Member::new(email, request.name.trim(), password_hash);
        let member = self.repository.insert(member).await?;

        info!(member_id = %member.id(), "Member registered");

        Ok(member.id())
    }

    async fn member_count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
