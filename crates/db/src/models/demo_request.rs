//! Row model for the `demo_requests` table.

use axalon_core::submission::DemoRequest;
use sqlx::FromRow;

/// The public columns of a `demo_requests` row.
#[derive(Debug, Clone, FromRow)]
pub struct DemoRequestRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub message: String,
    pub created_at: String,
}

impl From<DemoRequestRow> for DemoRequest {
    fn from(row: DemoRequestRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            company: row.company,
            role: row.role,
            message: row.message,
            created_at: row.created_at,
        }
    }
}
