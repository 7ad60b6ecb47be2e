/*
[INPUT]:  Database pool and environment configuration
[OUTPUT]: Configured axum application for the task store API
[POS]:    Crate root - router wiring and CORS
[UPDATE]: When adding routes or changing middleware
*/

pub mod db;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, put};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

/// Environment variable value, or a default when unset or empty
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Build the task store application over the given pool
pub fn create_app(pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(handlers::get_tasks).post(handlers::create_task),
        )
        .route(
            "/api/tasks/{id}",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .layer(cors_layer())
        .with_state(pool)
}

// Simple CORS for local dev: one allowed browser origin, credentials on.
fn cors_layer() -> CorsLayer {
    let origin = env_or("FRONTEND_ORIGIN", "http://localhost:5173")
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
