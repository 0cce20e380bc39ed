//! Registration wizard endpoints
//!
//! - `GET  /register/step1`: terms page
//! - `POST /register/step2`: consent (`agree`), then the details form
//! - `GET  /register/step2`: redirect to step 1
//! - `POST /register/step3`: submit details, validated
//! - `POST /register/step3errors`: submit details, strict binding and no validation

pub mod controller;
pub mod form;
pub mod render;

pub use controller::RegisterController;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::registration::{RegisterRequest, View};

use form::{AgreeForm, BoundForm};
use render::render;

/// Create the registration router
pub fn create_register_router() -> Router<AppState> {
    Router::new()
        .route("/step1", get(handle_step1))
        .route("/step2", post(handle_step2).get(handle_step2_get))
        .route("/step3", post(handle_step3))
        .route("/step3errors", post(handle_step3_errors))
}

/// GET /register/step1
pub async fn handle_step1(State(state): State<AppState>) -> Response {
    respond(&state, &state.register_controller.show_step1())
}

/// POST /register/step2
///
/// A request without a form body counts as `agree=false`. Checkbox values
/// (`on`, `yes`, `1`, empty) are accepted; anything else is rejected.
pub async fn handle_step2(
    State(state): State<AppState>,
    form: Result<Form<AgreeForm>, FormRejection>,
) -> Result<Response, FormRejection> {
    let agree = match form {
        Ok(Form(form)) => form.agree,
        Err(FormRejection::InvalidFormContentType(_)) => false,
        Err(rejection) => return Err(rejection),
    };

    Ok(respond(&state, &state.register_controller.submit_step2(agree)))
}

/// GET /register/step2
pub async fn handle_step2_get(State(state): State<AppState>) -> Response {
    respond(&state, &state.register_controller.get_step2())
}

/// POST /register/step3
pub async fn handle_step3(
    State(state): State<AppState>,
    BoundForm { value: request, binding }: BoundForm<RegisterRequest>,
) -> Result<Response, ApiError> {
    let controller = &state.register_controller;

    let mut binder = state.data_binder(RegisterRequest::OBJECT_NAME);
    controller.init_binder(&mut binder);

    let mut validation = binding;
    validation.merge(binder.validate(&request));

    let view = controller.submit_step3(request, validation).await?;
    Ok(respond(&state, &view))
}

/// POST /register/step3errors
pub async fn handle_step3_errors(
    State(state): State<AppState>,
    Form(request): Form<RegisterRequest>,
) -> Result<Response, ApiError> {
    let view = state
        .register_controller
        .submit_step3_no_validation(request)
        .await?;

    Ok(respond(&state, &view))
}

/// GET /main
pub async fn handle_main(State(state): State<AppState>) -> impl IntoResponse {
    respond(&state, &View::Main)
}

fn respond(state: &AppState, view: &View) -> Response {
    render(view, state.message_source.as_ref())
}
