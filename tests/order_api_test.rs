mod common;

use axum::http::{Method, StatusCode};
use sea_orm::EntityTrait;
use serde_json::{json, Value};

use order_api::entities::order::Entity as OrderEntity;

use common::{response_json, response_text, TestApp};

fn sample_payload() -> Value {
    json!({
        "customerName": "John Doe",
        "orderDate": "2023-07-06",
        "shippingAddress": "123 Main St",
        "total": 100.0
    })
}

/// POST a valid order and return its generated id.
async fn seed_order(app: &TestApp) -> i64 {
    let response = app
        .request(Method::POST, "/order/create", Some(sample_payload()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    body["id"].as_i64().expect("created order carries an id")
}

#[tokio::test]
async fn get_existing_order_returns_field_values() {
    let app = TestApp::new().await;
    let id = seed_order(&app).await;

    let response = app
        .request(Method::GET, &format!("/order/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["customerName"], "John Doe");
    assert_eq!(body["orderDate"], "2023-07-06");
    assert_eq!(body["shippingAddress"], "123 Main St");
    assert_eq!(body["total"].as_f64(), Some(100.0));
}

#[tokio::test]
async fn get_missing_order_returns_404_with_empty_body() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/order/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_text(response).await, "");
}

#[tokio::test]
async fn create_order_persists_and_populates_identity() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/order/create", Some(sample_payload()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    let id = body["id"].as_i64().expect("id populated");
    assert_eq!(body["customerName"], "John Doe");

    let saved = OrderEntity::find_by_id(id)
        .one(&*app.state.db)
        .await
        .expect("query order")
        .expect("order persisted");
    assert_eq!(saved.customer_name, "John Doe");
    assert_eq!(saved.shipping_address, "123 Main St");
}

#[tokio::test]
async fn create_order_with_invalid_fields_returns_one_message_per_violation() {
    let app = TestApp::new().await;

    let payload = json!({
        "customerName": "",
        "orderDate": null,
        "shippingAddress": "",
        "total": -10.0
    });
    let response = app
        .request(Method::POST, "/order/create", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let messages = body.as_array().expect("error body is a message array");
    assert_eq!(messages.len(), 4);
    for expected in [
        "customerName must not be empty",
        "orderDate is required",
        "shippingAddress must not be empty",
        "total must be positive",
    ] {
        assert!(
            messages.iter().any(|m| m == expected),
            "missing message: {expected}, got {messages:?}"
        );
    }

    // Nothing was persisted
    let orders = OrderEntity::find()
        .all(&*app.state.db)
        .await
        .expect("query orders");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn update_missing_order_returns_404_and_leaves_store_unchanged() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::PUT, "/order/1000", Some(sample_payload()))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_text(response).await,
        "Order with ID 1000 not found"
    );

    let orders = OrderEntity::find()
        .all(&*app.state.db)
        .await
        .expect("query orders");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn update_existing_order_replaces_fields_and_preserves_identity() {
    let app = TestApp::new().await;
    let id = seed_order(&app).await;

    let payload = json!({
        "customerName": "Jane Smith",
        "orderDate": "2023-08-01",
        "shippingAddress": "456 Oak Ave",
        "total": 300.0
    });
    let response = app
        .request(Method::PUT, &format!("/order/{id}"), Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["customerName"], "Jane Smith");
    assert_eq!(body["orderDate"], "2023-08-01");
    assert_eq!(body["shippingAddress"], "456 Oak Ave");
    assert_eq!(body["total"].as_f64(), Some(300.0));

    let fetched = app
        .request(Method::GET, &format!("/order/{id}"), None)
        .await;
    let body = response_json(fetched).await;
    assert_eq!(body["customerName"], "Jane Smith");
}

#[tokio::test]
async fn update_with_invalid_payload_returns_validation_errors() {
    let app = TestApp::new().await;
    let id = seed_order(&app).await;

    let payload = json!({
        "customerName": "",
        "orderDate": "2023-08-01",
        "shippingAddress": "456 Oak Ave",
        "total": 300.0
    });
    let response = app
        .request(Method::PUT, &format!("/order/{id}"), Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body,
        json!(["customerName must not be empty"]),
    );

    // Existing order is untouched
    let fetched = app
        .request(Method::GET, &format!("/order/{id}"), None)
        .await;
    let body = response_json(fetched).await;
    assert_eq!(body["customerName"], "John Doe");
}

#[tokio::test]
async fn delete_existing_order_removes_it() {
    let app = TestApp::new().await;
    let id = seed_order(&app).await;

    let response = app
        .request(Method::DELETE, &format!("/order/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response_text(response).await, "");

    let fetched = app
        .request(Method::GET, &format!("/order/{id}"), None)
        .await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    let exists = app
        .state
        .order_repository()
        .exists_by_id(id)
        .await
        .expect("exists query");
    assert!(!exists);
}

#[tokio::test]
async fn delete_missing_order_returns_404_with_message() {
    let app = TestApp::new().await;

    let response = app.request(Method::DELETE, "/order/424242", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_text(response).await,
        "Order with ID 424242 not found"
    );
}

#[tokio::test]
async fn health_probes_respond() {
    let app = TestApp::new().await;

    let live = app.request(Method::GET, "/health/live", None).await;
    assert_eq!(live.status(), StatusCode::OK);
    let body = response_json(live).await;
    assert_eq!(body["status"], "up");

    let ready = app.request(Method::GET, "/health/ready", None).await;
    assert_eq!(ready.status(), StatusCode::OK);
    let body = response_json(ready).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"]["status"], "up");
}
