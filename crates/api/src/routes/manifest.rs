use axum::routing::get;
use axum::Router;

use crate::handlers::manifest;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/manifest", get(manifest::get_manifest))
}
