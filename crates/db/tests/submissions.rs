//! Integration tests for the submission repositories.
//!
//! Exercises insert echo, listing order and cap, the unique id constraint,
//! and that the storage-internal `seq` key never surfaces.

use axalon_core::submission::{ContactMessage, DemoRequest};
use axalon_db::repositories::{ContactMessageRepo, DemoRequestRepo, MAX_LIST_LIMIT};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_demo_request(name: &str) -> DemoRequest {
    DemoRequest::from_payload(&json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "company": "Solar Co",
        "role": "Ops",
    }))
    .unwrap()
}

fn new_contact_message(subject: &str) -> ContactMessage {
    ContactMessage::from_payload(&json!({
        "name": "Ada",
        "email": "ada@x.com",
        "subject": subject,
        "message": "Test",
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Demo requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_record_unchanged(pool: PgPool) {
    let record = new_demo_request("Grace");
    let stored = DemoRequestRepo::create(&pool, &record).await.unwrap();
    assert_eq!(stored, record);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_every_inserted_record_in_order(pool: PgPool) {
    let mut inserted = Vec::new();
    for name in ["Ada", "Grace", "Barbara", "Frances"] {
        let record = new_demo_request(name);
        DemoRequestRepo::create(&pool, &record).await.unwrap();
        inserted.push(record);
    }

    let listed = DemoRequestRepo::list(&pool, MAX_LIST_LIMIT).await.unwrap();
    assert_eq!(listed, inserted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_of_empty_table_is_empty(pool: PgPool) {
    let listed = DemoRequestRepo::list(&pool, MAX_LIST_LIMIT).await.unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_honours_limit_and_cap(pool: PgPool) {
    for i in 0..5 {
        DemoRequestRepo::create(&pool, &new_demo_request(&format!("User{i}")))
            .await
            .unwrap();
    }

    assert_eq!(DemoRequestRepo::list(&pool, 2).await.unwrap().len(), 2);
    assert_eq!(DemoRequestRepo::list(&pool, 0).await.unwrap().len(), 1);
    assert_eq!(DemoRequestRepo::list(&pool, 1_000_000).await.unwrap().len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_id_is_rejected_and_not_stored(pool: PgPool) {
    let record = new_demo_request("Ada");
    DemoRequestRepo::create(&pool, &record).await.unwrap();

    let err = DemoRequestRepo::create(&pool, &record).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_demo_requests_id"));
        }
        other => panic!("expected database error, got {other:?}"),
    }

    let listed = DemoRequestRepo::list(&pool, MAX_LIST_LIMIT).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_fails_when_pool_is_closed(pool: PgPool) {
    pool.close().await;
    let err = DemoRequestRepo::create(&pool, &new_demo_request("Ada"))
        .await
        .unwrap_err();
    assert!(matches!(err, sqlx::Error::PoolClosed), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_message_create_and_list(pool: PgPool) {
    let first = new_contact_message("Hi");
    let second = new_contact_message("Pricing");

    assert_eq!(ContactMessageRepo::create(&pool, &first).await.unwrap(), first);
    assert_eq!(ContactMessageRepo::create(&pool, &second).await.unwrap(), second);

    let listed = ContactMessageRepo::list(&pool, MAX_LIST_LIMIT).await.unwrap();
    assert_eq!(listed, vec![first, second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn collections_are_independent(pool: PgPool) {
    ContactMessageRepo::create(&pool, &new_contact_message("Hi"))
        .await
        .unwrap();

    let demos = DemoRequestRepo::list(&pool, MAX_LIST_LIMIT).await.unwrap();
    assert!(demos.is_empty());
}
