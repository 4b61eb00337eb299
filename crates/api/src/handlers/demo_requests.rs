//! Handlers for demo-request submissions.
//!
//! The body is taken as raw JSON so that field extraction follows the
//! allow-list in `axalon_core::submission` rather than serde's structural
//! rules. Validation completes before any storage call is made.

use axalon_core::submission::DemoRequest;
use axalon_db::repositories::{DemoRequestRepo, MAX_LIST_LIMIT};
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /demo-requests
// ---------------------------------------------------------------------------

/// Validate, stamp, and store a demo request, echoing the stored record.
///
/// If the client disconnects mid-request the insert may or may not have
/// completed; there is no dedup.
pub async fn create_demo_request(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<DemoRequest>> {
    let record = DemoRequest::from_payload(&payload)?;
    let stored = DemoRequestRepo::create(&state.pool, &record).await?;

    tracing::info!(demo_request_id = %stored.id, "Demo request stored");

    Ok(Json(stored))
}

// ---------------------------------------------------------------------------
// GET /demo-requests
// ---------------------------------------------------------------------------

/// List stored demo requests, capped at [`MAX_LIST_LIMIT`].
pub async fn list_demo_requests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DemoRequest>>> {
    let requests = DemoRequestRepo::list(&state.pool, MAX_LIST_LIMIT).await?;
    Ok(Json(requests))
}
