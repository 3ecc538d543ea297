//! HTTP-level integration tests for the `/workflows` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{body_json, delete, get, post_json, put_json};
use kortex_core::pagination::MAX_PAGE_SIZE;
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_workflow(pool: &PgPool, name: &str) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/workflows/",
        json!({"name": name, "prompt_template": format!("{name}: {{input}}")}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn workflow_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prompt_workflows")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("timestamp should be a string")
        .parse()
        .expect("timestamp should be RFC 3339")
}

fn names(json: &Value) -> Vec<String> {
    json.as_array()
        .expect("response should be an array")
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_workflow_returns_full_record(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/workflows/",
        json!({
            "name": "Summarize",
            "description": "One-line summaries",
            "prompt_template": "Summarize: {text}",
            "parameters": {"temperature": 0.2, "max_tokens": 64}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Summarize");
    assert_eq!(json["description"], "One-line summaries");
    assert_eq!(json["prompt_template"], "Summarize: {text}");
    assert_eq!(json["parameters"], json!({"temperature": 0.2, "max_tokens": 64}));
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_trailing_slash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/workflows",
        json!({"name": "No Slash", "prompt_template": "t"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_missing_name_returns_422_and_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/workflows/", json!({"prompt_template": "t"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"]["name"][0], "name is required");
    assert!(json["details"]["prompt_template"].is_null());

    assert_eq!(workflow_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_missing_prompt_template_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/workflows/", json!({"name": "n"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["details"]["prompt_template"][0],
        "prompt_template is required"
    );

    assert_eq!(workflow_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_wrong_field_type_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/workflows/",
        json!({"name": 42, "prompt_template": "t"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"]["name"].is_array());
    assert_eq!(workflow_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_non_object_parameters_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/workflows/",
        json!({"name": "n", "prompt_template": "t", "parameters": ["a", "b"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["details"]["parameters"].is_array());
    assert_eq!(workflow_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_malformed_json_returns_422(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method("POST")
        .uri("/workflows/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_names_are_accepted(pool: PgPool) {
    let a = create_workflow(&pool, "Twin").await;
    let b = create_workflow(&pool, "Twin").await;
    assert_ne!(a["id"], b["id"]);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_returns_identical_record(pool: PgPool) {
    let created = create_workflow(&pool, "Get Me").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_in_insertion_order(pool: PgPool) {
    for name in ["A", "B", "C"] {
        create_workflow(&pool, name).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/workflows/?skip=0&limit=100").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await), vec!["A", "B", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_uses_defaults_without_params(pool: PgPool) {
    for name in ["A", "B", "C"] {
        create_workflow(&pool, name).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/workflows").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await).len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_skip_and_limit(pool: PgPool) {
    for name in ["A", "B", "C"] {
        create_workflow(&pool, name).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/workflows/?skip=1&limit=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await), vec!["B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_negative_skip_behaves_as_zero(pool: PgPool) {
    for name in ["A", "B"] {
        create_workflow(&pool, name).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/workflows/?skip=-5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await), vec!["A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_limit_is_capped(pool: PgPool) {
    let over = MAX_PAGE_SIZE + 5;
    sqlx::query(
        "INSERT INTO prompt_workflows (name, prompt_template)
         SELECT 'bulk-' || n, 't' FROM generate_series(1, $1) AS n",
    )
    .bind(over)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/workflows/?limit={}", over * 10)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len() as i64, MAX_PAGE_SIZE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_non_numeric_params_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/workflows/?limit=lots").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/workflows/",
            json!({
                "name": "Original",
                "description": "first",
                "prompt_template": "v1",
                "parameters": {"a": 1}
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/workflows/{id}"),
        json!({
            "name": "Updated",
            "description": "second",
            "prompt_template": "v2",
            "parameters": {"b": 2}
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Updated");
    assert_eq!(json["description"], "second");
    assert_eq!(json["prompt_template"], "v2");
    assert_eq!(json["parameters"], json!({"b": 2}));
    assert_eq!(json["created_at"], created["created_at"]);
    assert!(timestamp(&json["updated_at"]) > timestamp(&json["created_at"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_clears_omitted_optional_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/workflows/",
            json!({
                "name": "Keep",
                "description": "to be cleared",
                "prompt_template": "t",
                "parameters": {"x": true}
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/workflows/{id}"),
        json!({"name": "Keep", "prompt_template": "t"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["description"].is_null());
    assert!(json["parameters"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_invalid_body_returns_422(pool: PgPool) {
    let created = create_workflow(&pool, "Stable").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/workflows/{id}"), json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Row is untouched.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/workflows/{id}")).await).await;
    assert_eq!(json, created);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_get_returns_404(pool: PgPool) {
    let created = create_workflow(&pool, "Delete Me").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Workflow deleted successfully"
    );

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades_to_dependents(pool: PgPool) {
    let created = create_workflow(&pool, "Parent").await;
    let id = created["id"].as_i64().unwrap();

    sqlx::query("INSERT INTO prompt_evaluations (workflow_id, score) VALUES ($1, 0.5)")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO test_suites (workflow_id, name) VALUES ($1, 'suite')")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (remaining,): (i64,) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM prompt_evaluations) + (SELECT COUNT(*) FROM test_suites)",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(remaining, 0);
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_id_returns_404_for_get_update_delete(pool: PgPool) {
    let uri = "/workflows/999999";

    let app = common::build_test_app(pool.clone());
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "PromptWorkflow with id 999999 not found");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        uri,
        json!({"name": "Ghost", "prompt_template": "boo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(workflow_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_returns_400_json(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/workflows/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/workflows/abc",
        json!({"name": "n", "prompt_template": "t"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = delete(app, "/workflows/99999999999999999999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
