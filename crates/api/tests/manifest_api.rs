//! Integration tests for the static manifest endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn manifest_is_identical_across_calls(pool: PgPool) {
    let first = body_json(get(common::build_test_app(pool.clone()), "/api/manifest").await).await;
    let second = body_json(get(common::build_test_app(pool), "/api/manifest").await).await;
    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manifest_has_frontend_shape(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/manifest").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["palette"]["primary"], "#00D1B2");
    assert_eq!(json["fonts"].as_array().unwrap().len(), 3);
    assert!(json["og"]["description"].is_string());
    assert!(json["meta_keywords"].as_str().unwrap().contains("LiDAR"));
    assert_eq!(json["assets"].as_array().unwrap().len(), 3);
    assert_eq!(json["assets"][0]["key"], "hero_photoreal");
    assert_eq!(json["gsap_config"]["stagger"], 0.09);
    assert_eq!(
        json["gsap_config"]["parallax"]["background"]["translateY"],
        "-6%"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manifest_does_not_need_the_database(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/api/manifest").await;
    assert_eq!(response.status(), StatusCode::OK);
}
