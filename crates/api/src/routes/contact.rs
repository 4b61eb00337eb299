use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes. There is deliberately no listing route.
///
/// ```text
/// POST   /contact           -> create_contact_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::create_contact_message))
}
