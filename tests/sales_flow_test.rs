mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn full_sales_flow_end_to_end() {
    let app = TestApp::new().await;

    let (status, body) = app.request_json(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");

    let (status, entity) = app
        .request_json(
            Method::POST,
            "/api/billing-entities",
            Some(billing_entity_payload("1111111111", "Acme")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entity["id"], json!(1));

    let (status, customer) = app
        .request_json(
            Method::POST,
            "/api/customers",
            Some(customer_payload("Acme Store", 1)),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(customer["id"], json!(1));

    let (status, product) = app
        .request_json(
            Method::POST,
            "/api/products",
            Some(product_payload("Widget", "Widget X")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["id"], json!(1));

    let (status, sale) = app
        .request_json(Method::POST, "/api/sales", Some(sale_payload(1, "INV-1", "20.0")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sale["id"], json!(1));

    let (status, detail) = app
        .request_json(
            Method::POST,
            "/api/sale-details",
            Some(sale_detail_payload(1, 1, 2)),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(detail["id"], json!(1));

    // Foreign-key lookups see the new rows.
    let (status, sales) = app
        .request_json(Method::GET, "/api/sales/by-customer/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sales.as_array().map(Vec::len), Some(1));
    assert_eq!(sales[0]["id"], json!(1));

    let (status, details) = app
        .request_json(Method::GET, "/api/sale-details/sale/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details.as_array().map(Vec::len), Some(1));
    assert_eq!(details[0]["id"], json!(1));

    let (status, by_product) = app
        .request_json(Method::GET, "/api/sale-details/product/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_product.as_array().map(Vec::len), Some(1));

    // Natural-key lookups.
    let (status, by_invoice) = app
        .request_json(Method::GET, "/api/sales/by-invoice/INV-1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_invoice["id"], json!(1));

    let (status, _) = app
        .request_json(Method::GET, "/api/sales/by-invoice/INV-404", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, by_trade_name) = app
        .request_json(Method::GET, "/api/billing-entities/by-trade-name/Acme", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_trade_name["id"], json!(1));

    let (status, by_formal) = app
        .request_json(Method::GET, "/api/products/by-formal-name/Widget", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_formal["display_name"], json!("Widget X"));
}

#[tokio::test]
async fn active_flag_and_entity_type_filters() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/api/billing-entities",
        Some(billing_entity_payload("1111111111", "Acme")),
    )
    .await;

    let mut individual = billing_entity_payload("2222222222", "Jane Doe");
    individual["entity_type"] = json!("individual");
    individual["is_active"] = json!(false);
    app.request_json(Method::POST, "/api/billing-entities", Some(individual))
        .await;

    let (status, active) = app
        .request_json(Method::GET, "/api/billing-entities/active", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active.as_array().map(Vec::len), Some(1));
    assert_eq!(active[0]["trade_name"], json!("Acme"));

    let (status, individuals) = app
        .request_json(
            Method::GET,
            "/api/billing-entities/by-entity-type/individual",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(individuals.as_array().map(Vec::len), Some(1));
    assert_eq!(individuals[0]["trade_name"], json!("Jane Doe"));

    // Active customers under the first entity.
    app.request_json(
        Method::POST,
        "/api/customers",
        Some(customer_payload("Acme Store", 1)),
    )
    .await;
    let mut dormant = customer_payload("Acme Depot", 1);
    dormant["is_active"] = json!(false);
    app.request_json(Method::POST, "/api/customers", Some(dormant))
        .await;

    let (status, active_customers) = app
        .request_json(Method::GET, "/api/customers/active", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active_customers.as_array().map(Vec::len), Some(1));

    let (status, by_entity) = app
        .request_json(Method::GET, "/api/customers/by-billing-entity/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_entity.as_array().map(Vec::len), Some(2));

    let (status, none) = app
        .request_json(Method::GET, "/api/customers/by-billing-entity/99", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn payment_lookups_by_customer_and_method() {
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
        "/api/customers",
        Some(customer_payload("Acme Depot", 1)),
    )
    .await;

    app.request_json(
        Method::POST,
        "/api/payments",
        Some(payment_payload(1, "wire", "150.00")),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/payments",
        Some(payment_payload(1, "cash", "25.50")),
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/payments",
        Some(payment_payload(2, "wire", "99.99")),
    )
    .await;

    let (status, for_customer) = app
        .request_json(Method::GET, "/api/payments/customer/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(for_customer.as_array().map(Vec::len), Some(2));

    let (status, wires) = app
        .request_json(Method::GET, "/api/payments/method/wire", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wires.as_array().map(Vec::len), Some(2));

    let (status, cheques) = app
        .request_json(Method::GET, "/api/payments/method/cheque", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cheques, json!([]));

    // Full-replace update on a payment keeps the id and swaps the method.
    let mut replacement = payment_payload(1, "cheque", "25.50");
    replacement["reference_code"] = json!(null);
    let (status, updated) = app
        .request_json(Method::PUT, "/api/payments/2", Some(replacement))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], json!(2));
    assert_eq!(updated["method"], json!("cheque"));
    assert_eq!(updated["reference_code"], json!(null));
}
