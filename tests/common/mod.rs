// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use smesales_api::{config::AppConfig, db, AppState};

/// Harness running the full router over a fresh in-memory SQLite database.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let cfg = AppConfig::new("sqlite::memory:", "127.0.0.1", 0, "test");

        // A single pooled connection keeps every query on the same in-memory
        // database.
        let db_config = db::DbConfig {
            url: cfg.database_url.clone(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let pool = db::establish_connection_with_config(&db_config)
            .await
            .expect("failed to open test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let state = AppState::new(Arc::new(pool), cfg);
        Self {
            router: smesales_api::app(state),
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("router call failed")
    }

    /// Sends the request and decodes the JSON body. An empty body decodes to
    /// `Value::Null`.
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

pub fn billing_entity_payload(tax_or_citizen_id: &str, trade_name: &str) -> Value {
    json!({
        "tax_or_citizen_id": tax_or_citizen_id,
        "entity_type": "company",
        "trade_name": trade_name,
        "tax_office": "Kadikoy",
        "billing_address": "Invoice Street 1, Istanbul",
        "current_balance": "0.00",
        "is_active": true
    })
}

pub fn customer_payload(display_name: &str, billing_entity_id: i64) -> Value {
    json!({
        "display_name": display_name,
        "billing_entity_id": billing_entity_id,
        "delivery_address": "Warehouse Road 5, Istanbul",
        "is_active": true
    })
}

pub fn product_payload(formal_name: &str, display_name: &str) -> Value {
    json!({
        "formal_name": formal_name,
        "display_name": display_name,
        "unit_price": "10.0",
        "stock_quantity": 100,
        "is_active": true
    })
}

pub fn sale_payload(customer_id: i64, invoice_id: &str, total_amount: &str) -> Value {
    json!({
        "customer_id": customer_id,
        "order_date": "2024-06-01T10:00:00Z",
        "invoice_id": invoice_id,
        "total_amount": total_amount
    })
}

pub fn sale_detail_payload(sale_id: i64, product_id: i64, quantity: i64) -> Value {
    json!({
        "sale_id": sale_id,
        "product_id": product_id,
        "quantity": quantity,
        "unit_price": "10.0",
        "total_price": "20.0"
    })
}

pub fn payment_payload(customer_id: i64, method: &str, amount: &str) -> Value {
    json!({
        "customer_id": customer_id,
        "payment_date": "2024-06-02T09:30:00Z",
        "amount": amount,
        "method": method,
        "reference_code": "REF-001",
        "notes": null
    })
}
