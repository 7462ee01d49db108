use axum::middleware;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::observability;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod assignments;
pub mod audit_logs;
pub mod banks;
pub mod branches;
pub mod calendars;
pub mod departments;
pub mod divisions;
pub mod holidays;
pub mod hours;
pub mod positions;
pub mod regions;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Every resource under `/api/v1`, flat and nested.
pub fn api_router() -> Router<ServerState> {
    Router::new()
        .merge(banks::router())
        .merge(divisions::router())
        .merge(regions::router())
        .merge(branches::router())
        .merge(departments::router())
        .merge(positions::router())
        .merge(hours::router())
        .merge(holidays::router())
        .merge(calendars::router())
        .merge(assignments::router())
        .merge(audit_logs::router())
}

/// Build the full application router: API, health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/api/v1", api_router())
        .route("/health", get(health))
        .route("/metrics", get(observability::metrics))
        .route_layer(middleware::from_fn(observability::track_metrics))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
