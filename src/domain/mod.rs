//! Domain layer - entities, validation rules and service contracts

pub mod error;
pub mod member;
pub mod registration;

pub use error::DomainError;
pub use member::{Member, MemberId, MemberRegisterService, MemberRepository};
pub use registration::{RegisterRequest, ValidationResult, View};
