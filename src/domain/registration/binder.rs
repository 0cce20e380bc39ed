//! Data binder holding the validators applied to a bound form object

use std::any::Any;
use std::sync::Arc;

use tracing::debug;

use super::validation::ValidationResult;
use super::validator::Validator;

/// Per-request binder. Validators run in registration order and their
/// results are merged into one [`ValidationResult`].
#[derive(Debug, Clone, Default)]
pub struct DataBinder {
    object_name: String,
    validators: Vec<Arc<dyn Validator>>,
}

impl DataBinder {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            validators: Vec::new(),
        }
    }

    /// Create a binder seeded with application-wide validators
    pub fn with_validators(
        object_name: impl Into<String>,
        validators: impl IntoIterator<Item = Arc<dyn Validator>>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            validators: validators.into_iter().collect(),
        }
    }

    /// Register an additional validator after the existing ones
    pub fn add_validator(&mut self, validator: Arc<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn validators(&self) -> &[Arc<dyn Validator>] {
        &self.validators
    }

    /// Run every validator that supports `target`
    pub fn validate(&self, target: &dyn Any) -> ValidationResult {
        let mut result = ValidationResult::new();

        for validator in self.validators.iter().filter(|v| v.supports(target)) {
            result.merge(validator.validate(target));
        }

        debug!(
            object = %self.object_name,
            validators = self.validators.len(),
            errors = result.error_count(),
            "Bound object validated"
        );

        result
    }
}
