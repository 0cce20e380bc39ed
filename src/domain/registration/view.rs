//! Views selected by the registration workflow

use super::request::RegisterRequest;
use super::validation::ValidationResult;

pub const STEP1_PATH: &str = "/register/step1";

/// Page of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    /// Terms of service and consent
    Step1,
    /// Member details form
    Step2,
    /// Confirmation
    Step3,
}

impl RegistrationStep {
    pub fn view_name(&self) -> &'static str {
        match self {
            Self::Step1 => "register/step1",
            Self::Step2 => "register/step2",
            Self::Step3 => "register/step3",
        }
    }
}

/// Outcome of a workflow operation: a view to render or a redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Step1,
    Step2 {
        request: RegisterRequest,
        errors: ValidationResult,
    },
    Step3 {
        request: RegisterRequest,
    },
    Main,
    Redirect(String),
}

impl View {
    /// Step 2 showing a blank form
    pub fn blank_step2() -> Self {
        Self::Step2 {
            request: RegisterRequest::default(),
            errors: ValidationResult::new(),
        }
    }

    /// Logical view name, or `redirect:<path>` for redirects
    pub fn name(&self) -> String {
        match self {
            Self::Redirect(path) => format!("redirect:{}", path),
            Self::Main => "main".to_string(),
            other => other
                .step()
                .map(|s| s.view_name().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn step(&self) -> Option<RegistrationStep> {
        match self {
            Self::Step1 => Some(RegistrationStep::Step1),
            Self::Step2 { .. } => Some(RegistrationStep::Step2),
            Self::Step3 { .. } => Some(RegistrationStep::Step3),
            Self::Main | Self::Redirect(_) => None,
        }
    }

    /// The form object exposed to the page, if any
    pub fn request(&self) -> Option<&RegisterRequest> {
        match self {
            Self::Step2 { request, .. } | Self::Step3 { request } => Some(request),
            _ => None,
        }
    }

    pub fn errors(&self) -> Option<&ValidationResult> {
        match self {
            Self::Step2 { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names() {
        assert_eq!(View::Step1.name(), "register/step1");
        assert_eq!(View::blank_step2().name(), "register/step2");
        assert_eq!(
            View::Step3 {
                request: RegisterRequest::default()
            }
            .name(),
            "register/step3"
        );
        assert_eq!(View::Main.name(), "main");
        assert_eq!(
            View::Redirect(STEP1_PATH.to_string()).name(),
            "redirect:/register/step1"
        );
    }

    #[test]
    fn test_step1_exposes_no_request() {
        assert!(View::Step1.request().is_none());
        assert!(View::Step1.errors().is_none());
    }

    #[test]
    fn test_redirect_and_main_have_no_step() {
        assert_eq!(View::blank_step2().step(), Some(RegistrationStep::Step2));
        assert!(View::Main.step().is_none());
        assert!(View::Redirect(STEP1_PATH.to_string()).step().is_none());
    }
}
