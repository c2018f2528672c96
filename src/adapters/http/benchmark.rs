//! Image render test endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::dto::{BenchmarkResultsResponse, ErrorResponse, RunBenchmarkRequest};
use super::error::handle_domain_error;
use super::state::ApiState;

/// POST /api/benchmark/run - one timed conversion
pub async fn run_benchmark(
    State(state): State<ApiState>,
    payload: Result<Json<RunBenchmarkRequest>, JsonRejection>,
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

    match state.benchmark.run(req.image_type, req.columns).await {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/benchmark/results
pub async fn get_results(State(state): State<ApiState>) -> Response {
    let response = BenchmarkResultsResponse {
        results: state.benchmark.results().await,
        last_result: state.benchmark.last_result().await,
        comparison: state.benchmark.comparison().await,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// DELETE /api/benchmark/results
pub async fn clear_results(State(state): State<ApiState>) -> Response {
    state.benchmark.clear_results().await;
    StatusCode::NO_CONTENT.into_response()
}

pub fn benchmark_routes() -> Router<ApiState> {
    Router::new()
        .route("/run", post(run_benchmark))
        .route("/results", get(get_results).delete(clear_results))
}
