use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use crate::entities::payment::{self, Model as Payment};
use crate::errors::{ErrorResponse, ServiceError};
use crate::services::Crud;
use crate::AppState;

/// List every payment
#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "All payments", body = [payment::Model])
    ),
    tag = "Payments"
)]
pub async fn list_payments(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let payments = state.services.payments.get_all().await?;
    Ok(Json(payments))
}

/// Get a payment by id
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment found", body = payment::Model),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let found = state
        .services
        .payments
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("payment with id {} not found", id)))?;
    Ok(Json(found))
}

/// List payments made by a customer
#[utoipa::path(
    get,
    path = "/api/payments/customer/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Payments for customer", body = [payment::Model])
    ),
    tag = "Payments"
)]
pub async fn list_payments_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let payments = state.services.payments.get_by_customer(customer_id).await?;
    Ok(Json(payments))
}

/// List payments by method
#[utoipa::path(
    get,
    path = "/api/payments/method/{method}",
    params(("method" = String, Path, description = "Payment method")),
    responses(
        (status = 200, description = "Payments with method", body = [payment::Model])
    ),
    tag = "Payments"
)]
pub async fn list_payments_by_method(
    State(state): State<AppState>,
    Path(method): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let payments = state.services.payments.get_by_method(&method).await?;
    Ok(Json(payments))
}

/// Record a payment
#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = payment::Model,
    responses(
        (status = 201, description = "Payment recorded", body = payment::Model),
        (status = 409, description = "Unknown customer", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payment_info): Json<Payment>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = state.services.payments.create(payment_info).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created)))
}

/// Replace a payment
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment id")),
    request_body = payment::Model,
    responses(
        (status = 200, description = "Payment replaced", body = payment::Model),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payment_info): Json<Payment>,
) -> Result<impl IntoResponse, ServiceError> {
    let updated = state.services.payments.update(id, payment_info).await?;
    Ok(Json(updated))
}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 204, description = "Deleted (also when absent)")
    ),
    tag = "Payments"
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.payments.delete_by_id(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_payment))
        .route("/", get(list_payments))
        .route("/customer/:customer_id", get(list_payments_by_customer))
        .route("/method/:method", get(list_payments_by_method))
        .route("/:id", get(get_payment))
        .route("/:id", put(update_payment))
        .route("/:id", delete(delete_payment))
}
