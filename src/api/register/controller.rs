//! Registration workflow controller
//!
//! Chooses the view for each wizard step. Framework-independent: the axum
//! handlers in [`super::routes`] bind the form and hand the results here.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::member::MemberRegisterService;
use crate::domain::registration::{
    DataBinder, RegisterRequest, ValidationResult, Validator, View, STEP1_PATH,
};
use crate::domain::DomainError;

#[derive(Clone)]
pub struct RegisterController {
    member_register_service: Arc<dyn MemberRegisterService>,
    validator: Arc<dyn Validator>,
}

impl RegisterController {
    pub fn new(
        member_register_service: Arc<dyn MemberRegisterService>,
        validator: Arc<dyn Validator>,
    ) -> Self {
        Self {
            member_register_service,
            validator,
        }
    }

    /// Register this controller's validator for its form object
    pub fn init_binder(&self, binder: &mut DataBinder) {
        binder.add_validator(self.validator.clone());
    }

    pub fn show_step1(&self) -> View {
        View::Step1
    }

    /// Consent is required to reach the details form
    #[instrument(skip(self))]
    pub fn submit_step2(&self, agree: bool) -> View {
        if !agree {
            info!("Terms not accepted, returning to step 1");
            return View::Step1;
        }

        View::blank_step2()
    }

    /// Step 2 is only reachable by posting the consent form
    pub fn get_step2(&self) -> View {
        View::Redirect(STEP1_PATH.to_string())
    }

    /// Register the member unless validation already failed.
    ///
    /// A duplicate email is reported on the `email` field; any other service
    /// failure is returned to the caller.
    #[instrument(skip(self, request, validation), fields(email = %request.email))]
    pub async fn submit_step3(
        &self,
        request: RegisterRequest,
        mut validation: ValidationResult,
    ) -> Result<View, DomainError> {
        if validation.has_errors() {
            info!(
                error_count = validation.error_count(),
                "Validation failed, redisplaying step 2"
            );
            return Ok(View::Step2 {
                request,
                errors: validation,
            });
        }

        match self.member_register_service.register(&request).await {
            Ok(member_id) => {
                info!(member_id = %member_id, "Registration completed");
                Ok(View::Step3 { request })
            }
            Err(DomainError::DuplicateMember { .. }) => {
                info!("Email already registered, redisplaying step 2");
                validation.reject_value("email", "duplicate");
                Ok(View::Step2 {
                    request,
                    errors: validation,
                })
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                Err(e)
            }
        }
    }

    /// Diagnostic variant: registers without looking at validation, and
    /// drops the duplicate-email annotation.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn submit_step3_no_validation(
        &self,
        request: RegisterRequest,
    ) -> Result<View, DomainError> {
        match self.member_register_service.register(&request).await {
            Ok(_) => Ok(View::Step3 { request }),
            Err(DomainError::DuplicateMember { .. }) => Ok(View::Step2 {
                request,
                errors: ValidationResult::new(),
            }),
            Err(e) => Err(e),
        }
    }
}
