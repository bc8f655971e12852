//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness check
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - JSON API (CORS enabled)
//! - `GET  /`            - Dashboard
//! - `GET  /code/{code}` - Per-link stats page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable allowed origins on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - `*` or a comma-separated list of origins allowed to call `/api`
pub fn app_router(state: AppState, cors_origin: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, cors_origin))
}

/// Routes and per-route middleware, without path normalization.
///
/// Normalization has to wrap the whole router to run before routing, so it is
/// applied separately in [`app_router`].
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let api_router = api::routes::routes().layer(cors::layer(cors_origin));

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}
