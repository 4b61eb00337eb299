//! Handler for contact-form submissions. Contact messages are write-only
//! over HTTP.

use axalon_core::submission::ContactMessage;
use axalon_db::repositories::ContactMessageRepo;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /contact -- validate, stamp, and store a contact message.
pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<ContactMessage>> {
    let record = ContactMessage::from_payload(&payload)?;
    let stored = ContactMessageRepo::create(&state.pool, &record).await?;

    tracing::info!(contact_message_id = %stored.id, "Contact message stored");

    Ok(Json(stored))
}
