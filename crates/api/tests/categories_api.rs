//! HTTP-level integration tests for the category endpoints, including the
//! two-step delete-with-reassignment protocol.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, delete_json, get, new_store, post_json, put_json,
};
use notes_db::store::NotesStore;
use serde_json::json;

/// Names of all categories currently listed by the API.
async fn category_names(store: &Arc<dyn NotesStore>) -> Vec<String> {
    let json = body_json(get(build_test_app(store.clone()), "/api/categories").await).await;
    json.as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create / read / update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_starts_with_fallback_category() {
    let store = new_store();
    let response = get(build_test_app(store), "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!([{"id": 1, "name": "Misc", "color": "#9e9e9e"}]));
}

#[tokio::test]
async fn test_create_category_returns_201() {
    let store = new_store();
    let response = post_json(
        build_test_app(store.clone()),
        "/api/categories",
        json!({"name": " Work ", "color": "#2196f3"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Work");
    assert_eq!(json["color"], "#2196f3");
    let id = json["id"].as_i64().unwrap();

    let response = get(build_test_app(store), &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Work");
}

#[tokio::test]
async fn test_create_category_missing_fields_returns_400() {
    let store = new_store();

    let response = post_json(
        build_test_app(store.clone()),
        "/api/categories",
        json!({"color": "#2196f3"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Name is required");

    let response = post_json(
        build_test_app(store.clone()),
        "/api/categories",
        json!({"name": "Work", "color": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Color is required");

    assert_eq!(category_names(&store).await, vec!["Misc"]);
}

#[tokio::test]
async fn test_duplicate_category_name_returns_400() {
    let store = new_store();
    let first = common::create_category(&store, "Work", "#2196f3").await;

    let response = post_json(
        build_test_app(store.clone()),
        "/api/categories",
        json!({"name": "Work", "color": "#000000"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let json = body_json(get(build_test_app(store), "/api/categories").await).await;
    let work: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["name"] == "Work")
        .collect();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0]["id"], first);
    assert_eq!(work[0]["color"], "#2196f3");
}

#[tokio::test]
async fn test_update_category() {
    let store = new_store();
    let id = common::create_category(&store, "Work", "#2196f3").await;

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/categories/{id}"),
        json!({"color": "#123456"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Work");
    assert_eq!(json["color"], "#123456");

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/categories/{id}"),
        json!({"name": "Misc"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        build_test_app(store),
        "/api/categories/9999",
        json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Category not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_unused_category() {
    let store = new_store();
    let id = common::create_category(&store, "Temp", "#ffffff").await;

    let response = delete(build_test_app(store.clone()), &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category deleted successfully");
    assert_eq!(json["reassignedNotes"], 0);

    assert_eq!(category_names(&store).await, vec!["Misc"]);
}

#[tokio::test]
async fn test_delete_category_with_notes_requires_target() {
    let store = new_store();
    let work = common::create_category(&store, "Work", "#2196f3").await;
    let mut note_ids = Vec::new();
    for title in ["A", "B", "C"] {
        let note = common::create_note(&store, title, "body", json!(work)).await;
        note_ids.push(note["id"].as_i64().unwrap());
    }

    let response = delete(build_test_app(store.clone()), &format!("/api/categories/{work}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["noteCount"], 3);
    assert_eq!(json["code"], "CATEGORY_IN_USE");
    assert!(json["error"].as_str().unwrap().contains("associated notes"));

    // Nothing changed.
    assert_eq!(category_names(&store).await, vec!["Misc", "Work"]);
    for id in &note_ids {
        let response = get(build_test_app(store.clone()), &format!("/api/notes/{id}")).await;
        let note = body_json(response).await;
        assert_eq!(note["category_id"], work);
    }
}

#[tokio::test]
async fn test_delete_category_with_target_reassigns_notes() {
    let store = new_store();
    let work = common::create_category(&store, "Work", "#2196f3").await;
    let personal = common::create_category(&store, "Personal", "#4caf50").await;
    let a = common::create_note(&store, "A", "body", json!(work)).await;
    let b = common::create_note(&store, "B", "body", json!(work)).await;
    let other = common::create_note(&store, "Other", "body", json!(null)).await;

    let response = delete_json(
        build_test_app(store.clone()),
        &format!("/api/categories/{work}"),
        json!({"targetCategoryId": personal}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["reassignedNotes"], 2);

    assert_eq!(category_names(&store).await, vec!["Misc", "Personal"]);
    for note in [&a, &b] {
        let id = note["id"].as_i64().unwrap();
        let response = get(build_test_app(store.clone()), &format!("/api/notes/{id}")).await;
        let fetched = body_json(response).await;
        assert_eq!(fetched["category_id"], personal);
    }
    let id = other["id"].as_i64().unwrap();
    let fetched = body_json(get(build_test_app(store), &format!("/api/notes/{id}")).await).await;
    assert_eq!(fetched["category_id"], 1);
}

#[tokio::test]
async fn test_delete_category_accepts_string_target() {
    let store = new_store();
    let work = common::create_category(&store, "Work", "#2196f3").await;
    common::create_note(&store, "A", "body", json!(work)).await;

    let response = delete_json(
        build_test_app(store),
        &format!("/api/categories/{work}"),
        json!({"targetCategoryId": "1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_category_rejects_self_target() {
    let store = new_store();
    let work = common::create_category(&store, "Work", "#2196f3").await;
    common::create_note(&store, "A", "body", json!(work)).await;

    let response = delete_json(
        build_test_app(store.clone()),
        &format!("/api/categories/{work}"),
        json!({"targetCategoryId": work}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(category_names(&store).await, vec!["Misc", "Work"]);
}

#[tokio::test]
async fn test_delete_category_missing_target_returns_404() {
    let store = new_store();
    let work = common::create_category(&store, "Work", "#2196f3").await;
    let note = common::create_note(&store, "A", "body", json!(work)).await;

    let response = delete_json(
        build_test_app(store.clone()),
        &format!("/api/categories/{work}"),
        json!({"targetCategoryId": 777}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let id = note["id"].as_i64().unwrap();
    let response = get(build_test_app(store.clone()), &format!("/api/notes/{id}")).await;
    let fetched = body_json(response).await;
    assert_eq!(fetched["category_id"], work);
    assert_eq!(category_names(&store).await, vec!["Misc", "Work"]);
}

#[tokio::test]
async fn test_delete_nonexistent_category_returns_404() {
    let store = new_store();
    let response = delete(build_test_app(store), "/api/categories/5150").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fallback_category_cannot_be_deleted() {
    let store = new_store();
    let response = delete(build_test_app(store.clone()), "/api/categories/1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(category_names(&store).await, vec!["Misc"]);
}
