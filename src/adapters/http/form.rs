//! Form screen endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::dto::{ErrorResponse, SubmitFormRequest, ViewerRouteResponse};
use super::error::handle_domain_error;
use super::state::ApiState;

/// GET /api/form - last saved values or the defaults
pub async fn get_form(State(state): State<ApiState>) -> Response {
    let form = state.form.restore().await;
    (StatusCode::OK, Json(form)).into_response()
}

/// POST /api/form/submit - validate, save, generate
pub async fn submit_form(
    State(state): State<ApiState>,
    payload: Result<Json<SubmitFormRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };

    match state.form.submit(&req.values, req.file_name.as_deref()).await {
        Ok(route) => (StatusCode::CREATED, Json(ViewerRouteResponse::from(route))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

pub fn form_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(get_form))
        .route("/submit", post(submit_form))
}
