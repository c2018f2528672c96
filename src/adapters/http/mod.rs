//! HTTP adapters - REST API for the form, viewer and image test screens.
//!
//! ## Routes
//!
//! - `GET /api/form`, `POST /api/form/submit`
//! - `GET /api/viewer`, `POST /api/viewer/download`
//! - `POST /api/benchmark/run`, `GET|DELETE /api/benchmark/results`
//! - `GET /health`

pub mod benchmark;
pub mod dto;
pub mod error;
pub mod form;
pub mod health;
pub mod state;
pub mod viewer;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use benchmark::benchmark_routes;
pub use dto::ErrorResponse;
pub use error::handle_domain_error;
pub use form::form_routes;
pub use state::ApiState;
pub use viewer::viewer_routes;

/// Full application router.
///
/// An empty origin list allows any origin.
pub fn router(state: ApiState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/form", form_routes())
        .nest("/api/viewer", viewer_routes())
        .nest("/api/benchmark", benchmark_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(allowed)
    }
}
