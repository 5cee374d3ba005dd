//! HTTP-level integration tests for the project endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, sample_design};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(pool: &PgPool, body: serde_json::Value) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["projectId"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", sample_design()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["projectId"].as_str().expect("projectId should be a string");
    assert!(id.parse::<uuid::Uuid>().is_ok());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_default_user_and_name(pool: PgPool) {
    let id = create_project(&pool, sample_design()).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/projects/{id}")).await).await;
    assert_eq!(json["userId"], "placeholder_user");
    assert_eq!(json["projectName"], "Unnamed Project");
    assert!(json["prestaOrderId"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_round_trips_config_data_verbatim(pool: PgPool) {
    let body = json!({
        "userId": "customer-9",
        "projectName": "Club kit",
        "size": "XL",
        "material": "polyester",
        "color": "#112233",
        "view": "back",
        "elements": [
            {"type": "text", "text": "TEAM", "x": 12.5, "y": 40, "bold": true},
            {"type": "image", "src": "data:image/png;base64,AAAA", "rotation": -15}
        ],
        "quantity": 3
    });
    let id = create_project(&pool, body.clone()).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/projects/{id}")).await).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["userId"], "customer-9");
    assert_eq!(json["projectName"], "Club kit");
    assert_eq!(json["configData"], body);
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_ids_are_unique(pool: PgPool) {
    let a = create_project(&pool, sample_design()).await;
    let b = create_project(&pool, sample_design()).await;
    assert_ne!(a, b);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_null_field_returns_400_and_stores_nothing(pool: PgPool) {
    let mut body = sample_design();
    body["material"] = serde_json::Value::Null;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/projects").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_returns_all(pool: PgPool) {
    let first = create_project(&pool, sample_design()).await;
    let mut other = sample_design();
    other["size"] = json!("S");
    let second = create_project(&pool, other).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], first);
    assert_eq!(items[1]["id"], second);
    assert_eq!(items[1]["configData"]["size"], "S");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = uuid::Uuid::now_v7();
    let response = get(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Order linking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_link_and_fetch_by_order(pool: PgPool) {
    let id = create_project(&pool, sample_design()).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/projects/{id}/link-order"),
        json!({"prestaOrderId": "ORDER123"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project successfully linked to order");
    assert_eq!(json["projectId"], id);
    assert_eq!(json["prestaOrderId"], "ORDER123");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/by-order/ORDER123").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["projectId"], id);
    assert_eq!(json["projectName"], "Unnamed Project");
    assert!(json["createdAt"].is_string());
    assert_eq!(json["configData"], sample_design());
    assert_eq!(json["configData"]["size"], "M");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_order_twice_is_last_write_wins(pool: PgPool) {
    let id = create_project(&pool, sample_design()).await;
    let uri = format!("/api/projects/{id}/link-order");

    for order in ["ORDER-A", "ORDER-B"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &uri, json!({"prestaOrderId": order})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/projects/by-order/ORDER-A").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/projects/by-order/ORDER-B").await).await;
    assert_eq!(json["projectId"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shared_order_id_returns_most_recent_project(pool: PgPool) {
    let older = create_project(&pool, sample_design()).await;
    let newer = create_project(&pool, sample_design()).await;

    // Link the newer project first so link order cannot decide the result.
    for id in [&newer, &older] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/projects/{id}/link-order"),
            json!({"prestaOrderId": "SHARED"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/by-order/SHARED").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["projectId"], newer);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_order_same_arguments_is_idempotent(pool: PgPool) {
    let id = create_project(&pool, sample_design()).await;
    let uri = format!("/api/projects/{id}/link-order");

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &uri, json!({"prestaOrderId": "ORDER7"})).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["prestaOrderId"], "ORDER7");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_order_accepts_numeric_order_id(pool: PgPool) {
    let id = create_project(&pool, sample_design()).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/projects/{id}/link-order"),
        json!({"prestaOrderId": 1042}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["prestaOrderId"], "1042");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/by-order/1042").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_order_unknown_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = uuid::Uuid::now_v7();
    let response = post_json(
        app,
        &format!("/api/projects/{id}/link-order"),
        json!({"prestaOrderId": "ORDER123"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_unknown_order_returns_404(pool: PgPool) {
    create_project(&pool, sample_design()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/by-order/NO-SUCH-ORDER").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with order id NO-SUCH-ORDER not found");
}
