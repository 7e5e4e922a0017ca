mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

/// Seeds billing entity 1, customer 1, product 1, sale 1 and sale detail 1.
async fn seed_sale_chain(app: &TestApp) {
    app.request_json(
        Method::POST,
        "/api/billing-entities",
        Some(billing_entity_payload("1111111111", "Acme")),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/customers",
        Some(customer_payload("Acme Store", 1)),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/products",
        Some(product_payload("Widget", "Widget X")),
    )
    .await;
    app.request_json(Method::POST, "/api/sales", Some(sale_payload(1, "INV-1", "20.0")))
        .await;
    app.request_json(
        Method::POST,
        "/api/sale-details",
        Some(sale_detail_payload(1, 1, 2)),
    )
    .await;
}

#[tokio::test]
async fn deleting_a_sale_cascades_to_its_details() {
    let app = TestApp::new().await;
    seed_sale_chain(&app).await;

    let (status, details) = app
        .request_json(Method::GET, "/api/sale-details/sale/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details.as_array().map(Vec::len), Some(1));

    let (status, _) = app.request_json(Method::DELETE, "/api/sales/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, details) = app
        .request_json(Method::GET, "/api/sale-details/sale/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details.as_array().map(Vec::len), Some(0));

    let (_, all_details) = app
        .request_json(Method::GET, "/api/sale-details", None)
        .await;
    assert_eq!(all_details.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn deleting_a_customer_with_sales_is_rejected() {
    let app = TestApp::new().await;
    seed_sale_chain(&app).await;

    let (status, body) = app
        .request_json(Method::DELETE, "/api/customers/1", None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    // The customer survives the rejected delete.
    let (status, _) = app.request_json(Method::GET, "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_a_customer_with_payments_is_rejected() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/api/billing-entities",
        Some(billing_entity_payload("1111111111", "Acme")),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/customers",
        Some(customer_payload("Acme Store", 1)),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/payments",
        Some(payment_payload(1, "wire", "150.00")),
    )
    .await;

    let (status, _) = app
        .request_json(Method::DELETE, "/api/customers/1", None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_a_referenced_product_is_rejected() {
    let app = TestApp::new().await;
    seed_sale_chain(&app).await;

    let (status, _) = app.request_json(Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_a_billing_entity_with_customers_is_rejected() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/api/billing-entities",
        Some(billing_entity_payload("1111111111", "Acme")),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/customers",
        Some(customer_payload("Acme Store", 1)),
    )
    .await;

    let (status, _) = app
        .request_json(Method::DELETE, "/api/billing-entities/1", None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn dangling_references_are_rejected_on_create() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/customers",
            Some(customer_payload("Orphan", 42)),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (status, _) = app
        .request_json(Method::POST, "/api/sales", Some(sale_payload(42, "INV-9", "5.0")))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .request_json(
            Method::POST,
            "/api/payments",
            Some(payment_payload(42, "cash", "1.00")),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unreferenced_rows_delete_cleanly() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/api/billing-entities",
        Some(billing_entity_payload("1111111111", "Acme")),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/customers",
        Some(customer_payload("Acme Store", 1)),
    )
    .await;

    let (status, _) = app
        .request_json(Method::DELETE, "/api/customers/1", None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .request_json(Method::DELETE, "/api/billing-entities/1", None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, all) = app
        .request_json(Method::GET, "/api/billing-entities", None)
        .await;
    assert_eq!(all, json!([]));
}
