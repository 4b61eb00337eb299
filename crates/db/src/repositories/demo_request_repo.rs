//! Repository for the `demo_requests` table.

use axalon_core::submission::DemoRequest;
use sqlx::PgPool;

use crate::models::demo_request::DemoRequestRow;
use crate::repositories::clamp_list_limit;

/// Public column list; `seq` is deliberately absent.
const COLUMNS: &str = "id, name, email, company, role, message, created_at";

/// Stores and lists demo requests.
pub struct DemoRequestRepo;

impl DemoRequestRepo {
    /// Insert a canonical record and return it as stored.
    pub async fn create(pool: &PgPool, record: &DemoRequest) -> Result<DemoRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO demo_requests \
                (id, name, email, company, role, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DemoRequestRow>(&query)
            .bind(&record.id)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.company)
            .bind(&record.role)
            .bind(&record.message)
            .bind(&record.created_at)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// List up to `limit` demo requests in insertion order.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<DemoRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM demo_requests ORDER BY seq LIMIT $1");
        let rows = sqlx::query_as::<_, DemoRequestRow>(&query)
            .bind(clamp_list_limit(limit))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(DemoRequest::from).collect())
    }
}
