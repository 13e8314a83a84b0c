use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use order_catalog::AppState;
use order_catalog::catalog::repository::MemoryStore;
use order_catalog::gateway;

/// Router over a fresh in-memory store
fn app() -> Router {
    gateway::router(Arc::new(AppState::with_memory(MemoryStore::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_order(app: &Router, products: Value) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/orders",
        Some(json!({"date": "2023-07-09", "cost": 400.0, "products": products})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

#[tokio::test]
async fn widget_is_added_then_removed() {
    let app = app();
    let order = create_order(&app, json!([])).await;
    let order_id = order["id"].as_i64().expect("order id");
    assert_eq!(order["products"], json!([]));

    let (status, body) = send(
        &app,
        "POST",
        &format!("/orders/{order_id}/products"),
        Some(json!({"name": "Widget", "cost": 50.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Widget");
    assert_eq!(products[0]["cost"], 50.0);
    let widget_id = products[0]["id"].as_i64().expect("fresh id");

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/orders/{order_id}/products/{widget_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"], json!([]));
}

#[tokio::test]
async fn unknown_order_and_empty_order_are_distinguished() {
    let app = app();

    let (status, body) = send(&app, "GET", "/orders/42/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let order = create_order(&app, json!([])).await;
    let (status, body) = send(
        &app,
        "GET",
        &format!("/orders/{}/products", order["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn relation_routes_on_unknown_order_are_404() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/orders/7/products",
        Some(json!({"name": "a", "cost": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/orders/7/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/orders/7/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/orders/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_empties_order_but_keeps_products() {
    let app = app();
    let order = create_order(
        &app,
        json!([{"name": "a", "cost": 1.0}, {"name": "b", "cost": 2.0}]),
    )
    .await;

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/orders/{}/products", order["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"], json!([]));

    let (_, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_order_once() {
    let app = app();
    let order = create_order(&app, json!([{"name": "a", "cost": 1.0}])).await;
    let uri = format!("/orders/{}", order["id"]);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn product_crud_and_shared_membership() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({"name": "Gadget", "cost": 20.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product = body["data"].clone();
    let product_id = product["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], product);

    // Two orders referencing the same saved product
    let first = create_order(&app, json!([product.clone()])).await;
    let second = create_order(&app, json!([product.clone()])).await;
    assert_eq!(first["products"][0]["id"], product_id);
    assert_eq!(second["products"][0]["id"], product_id);

    let (status, _) = send(&app, "DELETE", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4002);

    let (_, body) = send(&app, "GET", &format!("/orders/{}", first["id"]), None).await;
    assert_eq!(body["data"]["products"], json!([]));
}

#[tokio::test]
async fn health_and_openapi() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["store"], "memory");

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/orders/{order_id}/products"].is_object());
}
