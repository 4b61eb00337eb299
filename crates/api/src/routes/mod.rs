pub mod contact;
pub mod demo_requests;
pub mod health;
pub mod manifest;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /                       service identity
/// /demo-requests          create, list
/// /contact                create
/// /manifest               static brand manifest
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::root))
        .merge(demo_requests::router())
        .merge(contact::router())
        .merge(manifest::router())
}
