//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, stats_handler};
use axum::{Router, routing::get};

/// Dashboard routes.
///
/// # Endpoints
///
/// - `GET /` - Link list with create form
/// - `GET /code/{code}` - Statistics page for a specific link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/code/{code}", get(stats_handler))
}
