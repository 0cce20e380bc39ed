//! Application state for shared services

use std::sync::Arc;

use crate::api::register::RegisterController;
use crate::domain::member::MemberRegisterService;
use crate::domain::registration::{
    DataBinder, DeclarativeValidator, MessageSource, RegisterRequest, RegisterRequestValidator,
    Validator,
};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub register_controller: Arc<RegisterController>,
    pub member_service: Arc<dyn MemberRegisterService>,
    pub message_source: Arc<dyn MessageSource>,
    /// Application-wide validators every data binder starts with
    pub global_validators: Vec<Arc<dyn Validator>>,
}

impl AppState {
    pub fn new(
        register_controller: Arc<RegisterController>,
        member_service: Arc<dyn MemberRegisterService>,
        message_source: Arc<dyn MessageSource>,
        global_validators: Vec<Arc<dyn Validator>>,
    ) -> Self {
        Self {
            register_controller,
            member_service,
            message_source,
            global_validators,
        }
    }

    /// Standard wiring around a member service: derived rules as the global
    /// validator, [`RegisterRequestValidator`] as the controller's own.
    pub fn from_service(
        member_service: Arc<dyn MemberRegisterService>,
        message_source: Arc<dyn MessageSource>,
    ) -> Self {
        let controller = RegisterController::new(
            member_service.clone(),
            Arc::new(RegisterRequestValidator::new()),
        );

        let declarative: Arc<dyn Validator> =
            Arc::new(DeclarativeValidator::<RegisterRequest>::new(&RegisterRequest::FIELDS));

        Self::new(
            Arc::new(controller),
            member_service,
            message_source,
            vec![declarative],
        )
    }

    /// A fresh binder seeded with the global validators
    pub fn data_binder(&self, object_name: &str) -> DataBinder {
        DataBinder::with_validators(object_name, self.global_validators.iter().cloned())
    }
}
