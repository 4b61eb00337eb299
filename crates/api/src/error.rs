use axalon_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and `sqlx::Error` for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `axalon_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing store could not complete a read or write.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::InvalidFields(errors)) => {
                let fields: Vec<_> = errors
                    .iter()
                    .map(|e| {
                        json!({
                            "field": e.field,
                            "kind": e.kind,
                            "message": e.message(),
                        })
                    })
                    .collect();
                let body = json!({
                    "error": self.to_string(),
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::Core(CoreError::Validation(msg)) => error_body(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            AppError::Database(err) => {
                let status = classify_sqlx_error(err);
                tracing::error!(error = %err, %status, "Storage operation failed");
                error_body(
                    status,
                    "STORAGE_UNAVAILABLE",
                    "The storage backend is unavailable".to_string(),
                )
            }
        }
    }
}

fn error_body(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status.
///
/// - Connectivity failures (I/O, TLS, pool exhausted or closed) map to 503.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
