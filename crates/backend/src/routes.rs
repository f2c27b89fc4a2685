use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::{handlers, system, AppState};

/// API routes without the static frontend fallback
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Connection handlers
        .route(
            "/api/v1/connections",
            get(handlers::a001_connection::list_all).post(handlers::a001_connection::create),
        )
        .route(
            "/api/v1/connections/:id",
            get(handlers::a001_connection::get_by_id),
        )
        // A002 Agent configuration handlers
        .route(
            "/api/v1/agent-configuration",
            put(handlers::a002_configuration::update),
        )
        .route(
            "/api/v1/agent-configuration/:agent_id",
            get(handlers::a002_configuration::get_for_agent),
        )
        .with_state(state)
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, dist: &Path) -> Router {
    api_routes(state)
        .fallback_service(ServeDir::new(dist))
        .layer(middleware::from_fn(system::middleware::request_logger))
}
