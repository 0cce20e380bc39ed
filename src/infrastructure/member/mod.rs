//! Member infrastructure module
//!
//! Argon2 password hashing, the in-memory member repository and the
//! registration service built on them.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryMemberRepository;
pub use service::MemberService;
