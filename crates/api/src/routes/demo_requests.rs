use axum::routing::post;
use axum::Router;

use crate::handlers::demo_requests;
use crate::state::AppState;

/// Demo request routes.
///
/// ```text
/// POST   /demo-requests     -> create_demo_request
/// GET    /demo-requests     -> list_demo_requests
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/demo-requests",
        post(demo_requests::create_demo_request).get(demo_requests::list_demo_requests),
    )
}
