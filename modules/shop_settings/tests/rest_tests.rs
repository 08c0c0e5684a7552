//! REST API tests driving the router in-process

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::{create_test_service, print_test_header};
use serde_json::{json, Value};
use shop_settings::api::rest::{auth::TokenRegistry, routes::register_routes};
use shop_settings::{ApiToken, Config};
use std::sync::Arc;
use tower::ServiceExt;

const PREFIX: &str = "/not_woo-plugin-api/v1";
const ADMIN: &str = "Bearer admin-token";

fn app_with_limit(max_data_size: usize) -> Router {
    let (service, _, _) = create_test_service();
    let config = Config {
        tokens: vec![
            ApiToken {
                token: "admin-token".into(),
                user: Some("admin".into()),
                capabilities: vec!["manage_options".into()],
            },
            ApiToken {
                token: "editor-token".into(),
                user: Some("editor".into()),
                capabilities: vec!["edit_posts".into()],
            },
        ],
        ..Config::default()
    };
    register_routes(
        Router::new(),
        &config.api_prefix(),
        Arc::new(service),
        Arc::new(TokenRegistry::new(&config.tokens)),
        max_data_size,
    )
    .unwrap()
}

fn app() -> Router {
    app_with_limit(1024 * 1024)
}

fn get(path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(format!("{PREFIX}{path}"));
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("{PREFIX}{path}"))
        .header(header::AUTHORIZATION, ADMIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("{PREFIX}{path}"))
        .header("x-wp-nonce", "admin-token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn full_body() -> Value {
    json!({
        "shop_active": "1",
        "shop_image": "banner.png",
        "paypal_address": "shop@example.com",
        "shop_css": "a { color: blue; }",
        "shop_js": ""
    })
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = app();
    let (status, body) = send(&app, get("/settings", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);

    let (status, _) = send(&app, get("/settings", Some("Bearer wrong"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_capability_is_forbidden() {
    let app = app();
    let (status, body) = send(&app, get("/settings", Some("Bearer editor-token"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["title"], "Forbidden");
}

#[tokio::test]
async fn test_get_settings_defaults() {
    let app = app();
    let (status, body) = send(&app, get("/settings", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::OK);

    let keys: Vec<&str> = body
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "shop_active",
            "shop_image",
            "paypal_address",
            "shop_css",
            "shop_css_minified",
            "shop_js",
            "shop_js_minified",
        ]
    );
    assert_eq!(body["shop_active"], 1);
}

#[tokio::test]
async fn test_post_settings_json() {
    print_test_header(
        "test_post_settings_json",
        &["Verify a JSON POST stores the record and returns it"],
    );
    let app = app();
    let (status, body) = send(&app, post_json("/settings", full_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop_css_minified"], "a{color:blue}");

    let (_, read) = send(&app, get("/settings", Some(ADMIN))).await;
    assert_eq!(read, body);
}

#[tokio::test]
async fn test_post_settings_form() {
    let app = app();
    let form = "shop_active=0&shop_image=x.png&paypal_address=p%40q.r&shop_css=&shop_js=var%20a%20%3D%201%3B";
    let (status, body) = send(&app, post_form("/settings", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop_active"], 0);
    assert_eq!(body["paypal_address"], "p@q.r");
    assert_eq!(body["shop_js_minified"], "var a=1;");
}

#[tokio::test]
async fn test_post_settings_missing_required_field() {
    print_test_header(
        "test_post_settings_missing_required_field",
        &["Verify a POST without every required field is rejected before storage"],
    );
    let app = app();
    let (status, body) = send(&app, post_json("/settings", json!({ "shop_active": "1" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["errors"].as_array().unwrap().is_empty());

    let (_, read) = send(&app, get("/settings", Some(ADMIN))).await;
    assert_eq!(read["shop_image"], "");
}

#[tokio::test]
async fn test_json_scalars_are_accepted() {
    let app = app();
    let mut body = full_body();
    body["shop_active"] = json!(false);
    let (status, saved) = send(&app, post_json("/settings", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["shop_active"], 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri(format!("{PREFIX}/settings"))
        .header(header::AUTHORIZATION, ADMIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Invalid Request Body");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let app = app_with_limit(64);
    let mut body = full_body();
    body["shop_css"] = json!("a".repeat(256));
    let (status, _) = send(&app, post_json("/settings", body)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_product_meta_routes() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/products/12/meta", json!({ "sku": "NW-12", "price": "5" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sku"], "NW-12");

    let (status, body) = send(&app, get("/products/12/meta", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], "5");
    assert_eq!(body["desc"], "");

    let (status, _) = send(&app, get("/products/0/meta", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_product_id_is_problem() {
    let app = app();
    let response = app
        .clone()
        .oneshot(get("/products/abc/meta", Some(ADMIN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );

    let (status, body) = send(&app, post_json("/products/-4/meta", json!({ "sku": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Invalid Product Id");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_content_type_routes() {
    let app = app();
    let (status, body) = send(&app, get("/content-types", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["items"][0]["name"], "product");
    assert_eq!(body["items"][3]["kind"], "taxonomy");

    let (status, body) = send(&app, get("/content-types/order", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["labels"]["singular_name"], "Order");

    let (status, body) = send(&app, get("/content-types/coupon", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}
