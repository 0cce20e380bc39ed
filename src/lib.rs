//! Member Registration
//!
//! A three-step sign-up wizard served over HTTP:
//! - step 1 asks for consent to the terms
//! - step 2 collects email, name and password
//! - step 3 confirms the registration
//!
//! Submissions are validated by derived field rules and a registration
//! validator; email uniqueness is enforced by the member service.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::member::MemberRegisterService;
use domain::registration::MessageSource;
use infrastructure::{Argon2Hasher, InMemoryMemberRepository, MemberService, StaticMessageSource};
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let message_source: Arc<dyn MessageSource> = match &config.messages.path {
        Some(path) => Arc::new(StaticMessageSource::load(path)?),
        None => Arc::new(StaticMessageSource::new()),
    };

    info!("Using in-memory member storage");
    let member_service: Arc<dyn MemberRegisterService> = Arc::new(MemberService::new(
        Arc::new(InMemoryMemberRepository::new()),
        Arc::new(Argon2Hasher::new()),
    ));

    Ok(AppState::from_service(member_service, message_source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessagesConfig;

    #[test]
    fn test_create_default_state() {
        let state = create_app_state().unwrap();
        assert_eq!(state.global_validators.len(), 1);
    }

    #[test]
    fn test_missing_message_bundle_fails() {
        let config = AppConfig {
            messages: MessagesConfig {
                path: Some("/nonexistent/messages.toml".to_string()),
            },
            ..AppConfig::default()
        };

        assert!(create_app_state_with_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_full_flow_against_in_memory_service() {
        use crate::domain::registration::RegisterRequest;

        let state = create_app_state().unwrap();
        let controller = state.register_controller.clone();
        let request = RegisterRequest::new("a@b.com", "A", "pw1", "pw1");

        let mut binder = state.data_binder(RegisterRequest::OBJECT_NAME);
        controller.init_binder(&mut binder);
        let validation = binder.validate(&request);

        let view = controller.submit_step3(request, validation).await.unwrap();

        assert_eq!(view.name(), "register/step3");
        assert_eq!(state.member_service.member_count().await.unwrap(), 1);
    }
}
