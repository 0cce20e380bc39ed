//! Renders workflow views as JSON documents

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use crate::domain::registration::{MessageSource, RegisterRequest, View};

/// Rendered page: view name, form model and resolved error messages
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<RegisterRequestModel>,
    pub errors: Vec<FieldErrorResponse>,
    pub global_errors: Vec<GlobalErrorResponse>,
}

/// Form values echoed back to the page. Passwords are never rendered.
#[derive(Debug, Serialize)]
pub struct RegisterRequestModel {
    pub email: String,
    pub name: String,
}

impl From<&RegisterRequest> for RegisterRequestModel {
    fn from(request: &RegisterRequest) -> Self {
        Self {
            email: request.email.clone(),
            name: request.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FieldErrorResponse {
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GlobalErrorResponse {
    pub code: String,
    pub message: String,
}

impl ViewResponse {
    pub fn from_view(view: &View, messages: &dyn MessageSource) -> Self {
        let object = RegisterRequest::OBJECT_NAME;

        let (errors, global_errors) = match view.errors() {
            Some(result) => (
                result
                    .field_errors()
                    .iter()
                    .map(|e| FieldErrorResponse {
                        field: e.field.clone(),
                        code: e.code.clone(),
                        message: messages.resolve(object, Some(e.field.as_str()), &e.code),
                    })
                    .collect(),
                result
                    .global_errors()
                    .iter()
                    .map(|code| GlobalErrorResponse {
                        code: code.clone(),
                        message: messages.resolve(object, None, code),
                    })
                    .collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Self {
            view: view.name(),
            model: view.request().map(RegisterRequestModel::from),
            errors,
            global_errors,
        }
    }
}

/// Turn a view into an HTTP response. Redirects become `303 See Other`.
pub fn render(view: &View, messages: &dyn MessageSource) -> Response {
    match view {
        View::Redirect(path) => Redirect::to(path).into_response(),
        _ => (StatusCode::OK, Json(ViewResponse::from_view(view, messages))).into_response(),
    }
}
