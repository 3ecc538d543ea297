//! Route definitions for the `/workflows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::workflow;
use crate::state::AppState;

/// Workflow routes, mounted at the root.
///
/// The collection answers with and without a trailing slash.
///
/// ```text
/// GET    /workflows/          -> list
/// POST   /workflows/          -> create
/// GET    /workflows/{id}      -> get_by_id
/// PUT    /workflows/{id}      -> update
/// DELETE /workflows/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workflows", get(workflow::list).post(workflow::create))
        .route("/workflows/", get(workflow::list).post(workflow::create))
        .route(
            "/workflows/{id}",
            get(workflow::get_by_id)
                .put(workflow::update)
                .delete(workflow::delete),
        )
}
