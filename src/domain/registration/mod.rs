//! Registration domain
//!
//! Form object, validators and views of the three-step sign-up wizard.

mod binder;
mod messages;
mod request;
mod validation;
mod validator;
mod view;

pub use binder::DataBinder;
pub use messages::{message_codes, MessageSource};
pub use request::RegisterRequest;
pub use validation::{FieldError, ValidationResult};
pub use validator::{DeclarativeValidator, RegisterRequestValidator, Validator};
pub use view::{RegistrationStep, View, STEP1_PATH};
