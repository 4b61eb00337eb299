//! Row model for the `contact_messages` table.

use axalon_core::submission::ContactMessage;
use sqlx::FromRow;

/// The public columns of a `contact_messages` row.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(row: ContactMessageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            created_at: row.created_at,
        }
    }
}
