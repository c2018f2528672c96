use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::dto::HealthResponse;
use super::state::ApiState;

/// GET /health - liveness plus whether the HTML converter can run
pub async fn health_check(State(state): State<ApiState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok",
        pdf_backend: state.backend,
        converter_available: state.converter.is_available().await,
    };
    (StatusCode::OK, Json(response))
}
