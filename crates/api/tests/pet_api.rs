//! HTTP-level integration tests for the pet endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn lolo() -> serde_json::Value {
    serde_json::json!({
        "name": "Lolo",
        "breed": "tabby",
        "description": "furry little demon",
        "age": 3,
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_pet_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/pets", lolo()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Lolo");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pet_detail_round_trips_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/pets", lolo()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/pets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["pet"]["name"], "Lolo");
    assert_eq!(json["pet"]["breed"], "tabby");
    assert_eq!(json["pet"]["description"], "furry little demon");
    assert_eq!(json["pet"]["age"], 3);
    // A fresh pet has no dependent records and every toy is assignable.
    assert_eq!(json["toys"].as_array().unwrap().len(), 0);
    assert_eq!(json["feedings"].as_array().unwrap().len(), 0);
    assert_eq!(json["photos"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_pet_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pets/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_pet_cannot_rename(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/pets", lolo()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/pets/{id}"),
        serde_json::json!({"breed": "calico", "age": 4}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // Name is untouched; the update DTO has no name field at all.
    assert_eq!(json["name"], "Lolo");
    assert_eq!(json["breed"], "calico");
    assert_eq!(json["age"], 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_pet_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/pets/999999",
        serde_json::json!({"breed": "calico"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_pet_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/pets", lolo()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/pets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/pets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_pets(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/pets", lolo()).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/pets",
        serde_json::json!({
            "name": "Sachi",
            "breed": "calico",
            "description": "gentle and loving",
            "age": 2,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Lolo");
    assert_eq!(arr[1]["name"], "Sachi");
}
