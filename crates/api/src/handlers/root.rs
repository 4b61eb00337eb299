use axum::Json;
use serde::Serialize;

/// Service identity returned by `GET /api/`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Axalon Systems API",
    })
}
