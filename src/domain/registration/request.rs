//! Registration request submitted through the sign-up form

use serde::Deserialize;
use validator::Validate;

/// Form data collected on step 2 of the registration wizard.
///
/// Fields missing from the submitted form bind as empty strings so that the
/// validators, not the binder, decide what is required.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(max = 255, code = "too_long"))]
    pub email: String,

    #[validate(length(max = 50, code = "too_long"))]
    pub name: String,

    #[validate(length(max = 128, code = "too_long"))]
    pub password: String,

    #[validate(length(max = 128, code = "too_long"))]
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Object name used for message code resolution
    pub const OBJECT_NAME: &'static str = "registerRequest";

    /// Form field names paired with their struct field names, in form order
    pub const FIELDS: [(&'static str, &'static str); 4] = [
        ("email", "email"),
        ("name", "name"),
        ("password", "password"),
        ("confirmPassword", "confirm_password"),
    ];

    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Whether every field is still blank, as on a freshly opened step 2
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && self.name.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }

    pub fn is_password_equal_to_confirm_password(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}
