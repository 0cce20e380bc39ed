//! Form validators
//!
//! Two kinds of validator feed the same [`ValidationResult`]:
//! - [`DeclarativeValidator`] runs the `#[validate(...)]` rules derived on a form type
//! - [`RegisterRequestValidator`] checks the registration rules imperatively

use std::any::Any;
use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use super::request::RegisterRequest;
use super::validation::ValidationResult;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[_A-Za-z0-9+-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(\.[A-Za-z]{2,})$")
        .unwrap()
});

/// A validator that can be registered on a data binder
pub trait Validator: Send + Sync + Debug {
    /// Whether this validator knows how to check the given target
    fn supports(&self, target: &dyn Any) -> bool;

    /// Validate a supported target. Unsupported targets yield an empty result.
    fn validate(&self, target: &dyn Any) -> ValidationResult;
}

/// Imperative rules for [`RegisterRequest`]
#[derive(Debug, Clone, Default)]
pub struct RegisterRequestValidator;

impl RegisterRequestValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, request: &RegisterRequest, errors: &mut ValidationResult) {
        if request.email.trim().is_empty() {
            errors.reject_value("email", "required");
        } else if !EMAIL_PATTERN.is_match(request.email.trim()) {
            errors.reject_value("email", "bad");
        }

        if request.name.trim().is_empty() {
            errors.reject_value("name", "required");
        }

        if request.password.is_empty() {
            errors.reject_value("password", "required");
        }

        if request.confirm_password.is_empty() {
            errors.reject_value("confirmPassword", "required");
        }

        if !request.password.is_empty()
            && !request.confirm_password.is_empty()
            && !request.is_password_equal_to_confirm_password()
        {
            errors.reject_value("confirmPassword", "nomatch");
        }
    }
}

impl Validator for RegisterRequestValidator {
    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<RegisterRequest>()
    }

    fn validate(&self, target: &dyn Any) -> ValidationResult {
        let mut errors = ValidationResult::new();

        if let Some(request) = target.downcast_ref::<RegisterRequest>() {
            self.check(request, &mut errors);
        }

        errors
    }
}

/// Adapter running the derived `validator::Validate` rules of `T`.
///
/// `fields` maps form field names to struct field names and fixes the order
/// in which field errors are reported.
pub struct DeclarativeValidator<T> {
    fields: &'static [(&'static str, &'static str)],
    _target: PhantomData<fn(&T)>,
}

impl<T> DeclarativeValidator<T> {
    pub fn new(fields: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            fields,
            _target: PhantomData,
        }
    }
}

impl<T> Debug for DeclarativeValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarativeValidator")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Validate + 'static> Validator for DeclarativeValidator<T> {
    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<T>()
    }

    fn validate(&self, target: &dyn Any) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(value) = target.downcast_ref::<T>() else {
            return result;
        };

        let Err(errors) = value.validate() else {
            return result;
        };

        let field_errors = errors.field_errors();

        for (form_field, struct_field) in self.fields {
            if let Some(list) = field_errors.get(*struct_field) {
                for error in list.iter() {
                    result.reject_value(*form_field, error.code.to_string());
                }
            }
        }

        // Rules on fields missing from the mapping are reported by struct name, sorted
        let known: HashSet<&str> = self.fields.iter().map(|(_, s)| *s).collect();
        let mut unmapped: Vec<(String, Vec<String>)> = field_errors
            .iter()
            .map(|(field, list)| (field.to_string(), list.iter().map(|e| e.code.to_string()).collect()))
            .filter(|(field, _)| !known.contains(field.as_str()))
            .collect();
        unmapped.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, codes) in unmapped {
            for code in codes {
                result.reject_value(field.clone(), code);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(request: &RegisterRequest) -> ValidationResult {
        RegisterRequestValidator::new().validate(request)
    }

    #[test]
    fn test_supports_register_request_only() {
        let validator = RegisterRequestValidator::new();
        assert!(validator.supports(&RegisterRequest::default()));
        assert!(!validator.supports(&"not a request".to_string()));
    }

    #[test]
    fn test_valid_request() {
        let result = validate(&RegisterRequest::new("a@b.com", "A", "pw1", "pw1"));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_password_mismatch() {
        let result = validate(&RegisterRequest::new("a@b.com", "A", "pw1", "pw2"));
        assert!(result.has_errors());
        assert_eq!(result.field_error_codes("confirmPassword"), vec!["nomatch"]);
    }

    #[test]
    fn test_empty_request_reports_required_fields_in_order() {
        let result = validate(&RegisterRequest::default());
        let fields: Vec<&str> = result.field_errors().iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["email", "name", "password", "confirmPassword"]);
        assert!(result.field_errors().iter().all(|e| e.code == "required"));
    }

    #[test]
    fn test_blank_email_is_required() {
        let result = validate(&RegisterRequest::new("   ", "A", "pw", "pw"));
        assert_eq!(result.field_error_codes("email"), vec!["required"]);
    }

    #[test]
    fn test_malformed_email() {
        let result = validate(&RegisterRequest::new("not-an-email", "A", "pw", "pw"));
        assert_eq!(result.field_error_codes("email"), vec!["bad"]);
    }

    #[test]
    fn test_email_with_subdomains_and_hyphens() {
        for email in [
            "kim@mail.my-company.com",
            "kim@my-company.co.kr",
            "first.last@a.b.c.example.org",
        ] {
            let result = validate(&RegisterRequest::new(email, "A", "pw", "pw"));
            assert!(!result.has_errors(), "{} should be accepted", email);
        }
    }

    #[test]
    fn test_email_without_domain_suffix() {
        let result = validate(&RegisterRequest::new("kim@localhost", "A", "pw", "pw"));
        assert_eq!(result.field_error_codes("email"), vec!["bad"]);
    }

    #[test]
    fn test_missing_confirm_password_is_not_a_mismatch() {
        let result = validate(&RegisterRequest::new("a@b.com", "A", "pw", ""));
        assert_eq!(result.field_error_codes("confirmPassword"), vec!["required"]);
    }

    #[test]
    fn test_deterministic() {
        let request = RegisterRequest::new("bad", "", "x", "y");
        assert_eq!(validate(&request), validate(&request));
    }

    #[test]
    fn test_unsupported_target_yields_no_errors() {
        let result = RegisterRequestValidator::new().validate(&42u32);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_declarative_validator_maps_field_names() {
        let validator = DeclarativeValidator::<RegisterRequest>::new(&RegisterRequest::FIELDS);
        let long = "x".repeat(129);
        let request = RegisterRequest::new("a@b.com", "n".repeat(51), &long, &long);

        let result = validator.validate(&request);
        let fields: Vec<&str> = result.field_errors().iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["name", "password", "confirmPassword"]);
        assert!(result.field_errors().iter().all(|e| e.code == "too_long"));
    }

    #[test]
    fn test_declarative_validator_passes_short_values() {
        let validator = DeclarativeValidator::<RegisterRequest>::new(&RegisterRequest::FIELDS);
        let result = validator.validate(&RegisterRequest::new("a@b.com", "A", "pw1", "pw2"));
        assert!(!result.has_errors());
    }
}
