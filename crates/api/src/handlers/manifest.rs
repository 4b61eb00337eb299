use axalon_core::manifest::{manifest, ManifestDocument};
use axum::Json;

/// GET /manifest -- the static brand manifest.
pub async fn get_manifest() -> Json<&'static ManifestDocument> {
    Json(manifest())
}
