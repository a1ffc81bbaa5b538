//! Integration tests for `GET /api/products/{id}/combinations`.
//!
//! Seeds the database from the db crate's SQL fixtures and drives the full
//! router, middleware included.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "catalog"))
)]
async fn lists_all_combinations_for_product(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/prod-shirt/combinations").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let combos = json.as_array().expect("body must be a bare JSON array");
    assert_eq!(combos.len(), 8);

    assert_eq!(
        combos[0],
        json!({
            "id": "1",
            "productId": "prod-shirt",
            "productSplitRuleId": "rule-a",
            "combination": { "Color": "Blue", "Size": "L" },
        })
    );
    assert_eq!(combos[5]["combination"], json!({ "Color": "Red", "Size": "S" }));
    assert_eq!(
        combos[6],
        json!({
            "id": "7",
            "productId": "prod-shirt",
            "productSplitRuleId": "rule-b",
            "combination": { "Material": "Cotton" },
        })
    );
    assert_eq!(combos[7]["id"], "8");
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "catalog"))
)]
async fn combination_keys_follow_field_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/prod-shirt/combinations").await;

    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    let text = std::str::from_utf8(&bytes).unwrap();

    assert!(text.starts_with(
        r#"[{"id":"1","productId":"prod-shirt","productSplitRuleId":"rule-a","combination":{"Color":"Blue","Size":"L"}}"#
    ));
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "catalog"))
)]
async fn product_without_rules_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/prod-mug/combinations").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "catalog"))
)]
async fn unknown_product_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/no-such-product/combinations").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "catalog"))
)]
async fn repeated_requests_return_identical_bodies(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = body_json(get(app.clone(), "/api/products/prod-shirt/combinations").await).await;
    let second = body_json(get(app, "/api/products/prod-shirt/combinations").await).await;

    assert_eq!(first, second);
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "malformed_rule"))
)]
async fn query_failure_returns_sanitized_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/prod-broken/combinations").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = false)]
async fn missing_schema_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/prod-shirt/combinations").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
