//! Infrastructure layer - concrete storage, hashing, messages and logging

pub mod logging;
pub mod member;
pub mod messages;

pub use member::{Argon2Hasher, InMemoryMemberRepository, MemberService, PasswordHasher};
pub use messages::StaticMessageSource;
