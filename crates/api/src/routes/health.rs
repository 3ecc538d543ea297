use axum::routing::get;
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Service banner and health probe.
///
/// ```text
/// GET /         -> root
/// GET /health   -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::root))
        .route("/health", get(service::health_check))
}
