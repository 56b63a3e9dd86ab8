//! HTTP-level integration tests for `/api/v1/tours`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

const TOURS: &str = "/api/v1/tours";

async fn create_tour(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), TOURS, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_title_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        TOURS,
        json!({"duration_minutes": 30, "video_url": "https://video.example/a.mp4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Title is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_only_title_defaults_fields(pool: PgPool) {
    let json = create_tour(&pool, json!({"title": "Impressionists"})).await;

    assert_eq!(json["title"], "Impressionists");
    for field in ["description", "video_url", "thumbnail_url", "category"] {
        assert_eq!(json[field], "", "{field} should default to empty");
    }
    assert_eq!(json["duration_minutes"], 0);
    assert_eq!(json["viewers_count"], 0);
    assert_eq!(json["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_ignores_viewers_count(pool: PgPool) {
    let json = create_tour(&pool, json!({"title": "Inflated", "viewers_count": 9000})).await;
    assert_eq!(json["viewers_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_get(pool: PgPool) {
    let first = create_tour(&pool, json!({"title": "Ancient Greece", "duration_minutes": 25})).await;
    let second = create_tour(&pool, json!({"title": "Modern Art", "duration_minutes": 50})).await;

    let response = get(common::build_test_app(pool.clone()), TOURS).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Modern Art", "Ancient Greece"]);

    let id = first["id"].as_i64().unwrap();
    let response = get(common::build_test_app(pool), &format!("{TOURS}?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["duration_minutes"], 25);
    assert_ne!(json["id"], second["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_of_viewers_count(pool: PgPool) {
    let created = create_tour(
        &pool,
        json!({
            "title": "Egyptian Hall",
            "description": "Mummies and papyri",
            "duration_minutes": 35,
            "category": "History"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    common::tick().await;

    let response = put_json(
        common::build_test_app(pool),
        TOURS,
        json!({"id": id, "viewers_count": 512}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["viewers_count"], 512);
    for field in ["title", "description", "duration_minutes", "category", "created_at"] {
        assert_eq!(updated[field], created[field], "{field} should be unchanged");
    }
    assert!(common::timestamp(&updated["updated_at"]) > common::timestamp(&created["updated_at"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_soft_deleted_returns_404(pool: PgPool) {
    let created = create_tour(&pool, json!({"title": "Closed Wing"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("{TOURS}?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        common::build_test_app(pool),
        TOURS,
        json!({"id": id, "title": "Reopened"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Tour not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_returns_200_then_404(pool: PgPool) {
    let created = create_tour(&pool, json!({"title": "Once Only"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("{TOURS}?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Tour deleted successfully");

    let response = delete(common::build_test_app(pool), &format!("{TOURS}?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_non_numeric_id_returns_opaque_500(pool: PgPool) {
    let response = delete(common::build_test_app(pool), &format!("{TOURS}?id=first")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
