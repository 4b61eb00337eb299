//! Repository for the `contact_messages` table.

use axalon_core::submission::ContactMessage;
use sqlx::PgPool;

use crate::models::contact_message::ContactMessageRow;
use crate::repositories::clamp_list_limit;

/// Public column list; `seq` is deliberately absent.
const COLUMNS: &str = "id, name, email, subject, message, created_at";

/// Stores and lists contact messages.
///
/// Listing is available to operators and tests only; the HTTP surface
/// treats contact messages as write-only.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Insert a canonical record and return it as stored.
    pub async fn create(
        pool: &PgPool,
        record: &ContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages \
                (id, name, email, subject, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactMessageRow>(&query)
            .bind(&record.id)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.subject)
            .bind(&record.message)
            .bind(&record.created_at)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// List up to `limit` contact messages in insertion order.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages ORDER BY seq LIMIT $1");
        let rows = sqlx::query_as::<_, ContactMessageRow>(&query)
            .bind(clamp_list_limit(limit))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}
