use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::{handlers, system, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/config.json", get(handlers::admin_config::get_admin_config))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(system::middleware::request_logger::request_logger))
        .with_state(state)
}
