//! Member domain
//!
//! Member entity, storage trait and the registration service contract.

mod entity;
mod repository;
mod service;

pub use entity::{Member, MemberId};
pub use repository::MemberRepository;
pub use service::MemberRegisterService;

#[cfg(test)]
pub use service::MockMemberRegisterService;
