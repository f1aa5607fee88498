//! HTTP-level integration tests for the asset catalog endpoints.
//!
//! Uses tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_insight, delete, get, patch_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_chart_returns_201() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/assets",
        json!({
            "type": "chart",
            "description": "Quarterly sales",
            "data": {
                "title": "Sales",
                "axis_x_title": "Month",
                "axis_y_title": "Revenue",
                "data": [[1.0, 100.0], [2.0, 150.0]]
            }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "chart");
    assert_eq!(json["data"]["description"], "Quarterly sales");
    assert_eq!(json["data"]["data"]["title"], "Sales");
    assert!(json["data"]["id"].is_string());
    assert_eq!(json["data"]["created_at"], json["data"]["updated_at"]);
}

#[tokio::test]
async fn test_get_asset_by_id() {
    let app = common::build_test_app();
    let created = create_insight(&app, "Get Me").await;
    let id = created["id"].as_str().unwrap();

    let response = get(&app, &format!("/api/v1/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], created);
}

#[tokio::test]
async fn test_get_nonexistent_asset_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/assets/00000000-0000-0000-0000-000000000000").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_asset_id_returns_400() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/assets/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_with_unknown_type_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/assets",
        json!({"type": "video", "description": "x", "data": {}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_without_required_field_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/assets",
        json!({"type": "audience", "description": "x", "data": {"birth_country": "UK"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_with_malformed_body_returns_400() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/assets", json!({"description": "no type"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_assets_paginates_with_total() {
    let app = common::build_test_app();
    for i in 0..7 {
        create_insight(&app, &format!("asset {i}")).await;
    }

    let response = get(&app, "/api/v1/assets?limit=5&offset=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["total"], 7);
    assert_eq!(json["limit"], 5);
    assert_eq!(json["offset"], 5);
}

#[tokio::test]
async fn test_list_assets_offset_past_end_is_empty() {
    let app = common::build_test_app();
    create_insight(&app, "only").await;

    let json = body_json(get(&app, "/api/v1/assets?offset=10").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn test_list_assets_limit_is_capped() {
    let mut config = common::test_config();
    config.max_page_items = 3;
    let app = common::build_test_app_with(config);
    for i in 0..5 {
        create_insight(&app, &format!("asset {i}")).await;
    }

    let json = body_json(get(&app, "/api/v1/assets?limit=50").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["limit"], 3);

    // Non-positive limits fall back to the ceiling.
    let json = body_json(get(&app, "/api/v1/assets?limit=0").await).await;
    assert_eq!(json["limit"], 3);
}

#[tokio::test]
async fn test_list_assets_sorted_by_description() {
    let app = common::build_test_app();
    for name in ["banana", "apple", "cherry"] {
        create_insight(&app, name).await;
    }

    let json = body_json(get(&app, "/api/v1/assets?sort_by=description&order=asc").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["description"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["apple", "banana", "cherry"]);

    let json = body_json(get(&app, "/api/v1/assets?sortBy=description").await).await;
    assert_eq!(json["data"][0]["description"], "cherry");
}

#[tokio::test]
async fn test_list_assets_malformed_limit_returns_400() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/assets?limit=many").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_description() {
    let app = common::build_test_app();
    let created = create_insight(&app, "Before").await;
    let id = created["id"].as_str().unwrap();

    let response = patch_json(
        &app,
        &format!("/api/v1/assets/{id}/description"),
        json!({"description": "After"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["description"], "After");
    assert_eq!(json["data"]["created_at"], created["created_at"]);
    assert_ne!(json["data"]["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn test_update_description_rejects_blank() {
    let app = common::build_test_app();
    let created = create_insight(&app, "Before").await;
    let id = created["id"].as_str().unwrap();

    let response = patch_json(
        &app,
        &format!("/api/v1/assets/{id}/description"),
        json!({"description": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_asset_returns_404() {
    let app = common::build_test_app();
    let response = patch_json(
        &app,
        "/api/v1/assets/00000000-0000-0000-0000-000000000000/description",
        json!({"description": "After"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_asset() {
    let app = common::build_test_app();
    let created = create_insight(&app, "Delete Me").await;
    let id = created["id"].as_str().unwrap();

    let response = delete(&app, &format!("/api/v1/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, &format!("/api/v1/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
