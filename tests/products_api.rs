//! HTTP-level tests for the product routes, driven through the full router
//! against the in-memory store.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use productos_api::{
    models::{Product, ProductFields},
    routes::create_app,
    state::AppState,
    store::{InMemoryProductStore, ProductStore, StoreError, StoreResult},
};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    create_app(AppState::new(InMemoryProductStore::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/productos",
        Some(json!({ "name": name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

fn error_count(body: &Value) -> usize {
    body["errors"].as_array().map(Vec::len).unwrap_or_default()
}

#[tokio::test]
async fn api_root_returns_json_message() {
    let app = app();
    let request = Request::builder().uri("/api").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.contains("json"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["msg"], "From API");
}

#[tokio::test]
async fn create_without_fields_reports_four_errors() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/productos", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 4);
    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["msg"], "Name product is required");
}

#[tokio::test]
async fn create_with_zero_price_reports_one_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(json!({ "name": "Monitor", "price": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(
        body["errors"][0]["msg"],
        "Price product must be greater than zero"
    );
}

#[tokio::test]
async fn create_with_text_price_reports_two_errors() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(json!({ "name": "Monitor", "price": "hola" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 2);
}

#[tokio::test]
async fn create_with_overflowing_price_is_rejected() {
    let app = app();
    let price = format!("1{}", "0".repeat(400));
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(json!({ "name": "Monitor", "price": price })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(
        body["errors"][0]["msg"],
        "Price product must be greater than zero"
    );

    let (_, list) = send(&app, Method::GET, "/api/productos", None).await;
    assert_eq!(list["data"], json!([]));
}

#[tokio::test]
async fn create_defaults_availability_to_true() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(json!({ "name": "Test Product", "price": 19.99 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["name"], "Test Product");
    assert_eq!(body["data"]["price"], 19.99);
    assert_eq!(body["data"]["availability"], true);
    assert!(body["data"]["id"].is_i64());
}

#[tokio::test]
async fn create_without_json_content_type_is_validated_as_empty() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/productos")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"name":"Monitor","price":10}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/productos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name": "#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Malformed JSON body");
}

#[tokio::test]
async fn list_returns_created_products() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/productos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    create(&app, "Monitor", 300.0).await;
    create(&app, "Mouse", 20.0).await;

    let (status, body) = send(&app, Method::GET, "/api/productos", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Monitor", "Mouse"]);
}

#[tokio::test]
async fn get_with_invalid_id_is_rejected() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/productos/not-valid-url", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "ID must be an integer");
    assert_eq!(body["errors"][0]["location"], "params");
}

#[tokio::test]
async fn get_with_undecodable_id_is_a_bad_request() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/productos/%FF", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_missing_product_is_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/productos/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn get_is_repeatable() {
    let app = app();
    let created = create(&app, "Lámpara", 45.0).await;
    let uri = format!("/api/productos/{}", created["id"]);

    let (first_status, first) = send(&app, Method::GET, &uri, None).await;
    let (second_status, second) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["data"], created);
}

#[tokio::test]
async fn replace_with_empty_body_reports_five_errors() {
    let app = app();
    let created = create(&app, "Silla", 80.0).await;
    let uri = format!("/api/productos/{}", created["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 5);
}

#[tokio::test]
async fn replace_with_bad_id_and_body_reports_both() {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/api/productos/abc", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 6);
    assert_eq!(body["errors"][0]["path"], "id");
}

#[tokio::test]
async fn replace_overwrites_all_fields() {
    let app = app();
    let created = create(&app, "Silla", 80.0).await;
    let uri = format!("/api/productos/{}", created["id"]);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "Silla gamer", "price": 250.5, "availability": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], created["id"]);
    assert_eq!(body["data"]["name"], "Silla gamer");
    assert_eq!(body["data"]["price"], 250.5);
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn replace_missing_product_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/productos/2000",
        Some(json!({ "name": "Nada", "price": 1, "availability": true })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn patch_alternates_availability() {
    let app = app();
    let created = create(&app, "Teclado", 60.0).await;
    let uri = format!("/api/productos/{}", created["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);
    assert_eq!(body["data"]["name"], "Teclado");
    assert_eq!(body["data"]["price"], 60.0);

    let (_, body) = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(body["data"]["availability"], true);

    let (_, body) = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn patch_missing_product_is_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/api/productos/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("data").is_none());
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn patch_with_invalid_id_is_rejected() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/api/productos/1.5", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
}

#[tokio::test]
async fn delete_then_delete_again() {
    let app = app();
    let created = create(&app, "Cable HDMI", 9.99).await;
    let uri = format!("/api/productos/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "Product deleted successfully");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

/// A store whose every call fails.
struct BrokenStore;

fn broken<T>() -> StoreResult<T> {
    Err(StoreError::Database(sea_orm::DbErr::Custom(
        "connection refused".to_string(),
    )))
}

#[async_trait]
impl ProductStore for BrokenStore {
    async fn create(&self, _fields: ProductFields) -> StoreResult<Product> {
        broken()
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        broken()
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Product>> {
        broken()
    }

    async fn update(&self, _id: i64, _fields: ProductFields) -> StoreResult<Option<Product>> {
        broken()
    }

    async fn delete(&self, _id: i64) -> StoreResult<bool> {
        broken()
    }
}

#[tokio::test]
async fn store_failure_is_internal_error_without_details() {
    let app = create_app(AppState::new(BrokenStore));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(json!({ "name": "Monitor", "price": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));

    let (status, _) = send(&app, Method::GET, "/api/productos", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_runs_before_a_broken_store() {
    let app = create_app(AppState::new(BrokenStore));
    let (status, body) = send(&app, Method::GET, "/api/productos/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
}
