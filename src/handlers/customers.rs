use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use validator::Validate;

use crate::entities::customer::Model as Customer;
use crate::errors::ServiceError;
use crate::services::Crud;
use crate::AppState;

async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let customers = state.services.customers.get_all().await?;
    Ok(Json(customers))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = state
        .services
        .customers
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("customer with id {} not found", id)))?;
    Ok(Json(customer))
}

async fn get_customer_by_display_name(
    State(state): State<AppState>,
    Path(display_name): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = state
        .services
        .customers
        .get_by_display_name(&display_name)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "customer with display name {} not found",
                display_name
            ))
        })?;
    Ok(Json(customer))
}

async fn list_active_customers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let customers = state.services.customers.get_active().await?;
    Ok(Json(customers))
}

async fn list_customers_by_billing_entity(
    State(state): State<AppState>,
    Path(billing_entity_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let customers = state
        .services
        .customers
        .get_by_billing_entity(billing_entity_id)
        .await?;
    Ok(Json(customers))
}

async fn customer_exists(
    State(state): State<AppState>,
    Path(display_name): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let exists = state
        .services
        .customers
        .exists_by_display_name(&display_name)
        .await?;
    Ok(Json(exists))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(customer_info): Json<Customer>,
) -> Result<impl IntoResponse, ServiceError> {
    customer_info.validate()?;
    let created_customer = state.services.customers.create(customer_info).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created_customer)))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(customer_info): Json<Customer>,
) -> Result<impl IntoResponse, ServiceError> {
    customer_info.validate()?;
    let updated_customer = state.services.customers.update(id, customer_info).await?;
    Ok(Json(updated_customer))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.customers.delete_by_id(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/active", get(list_active_customers))
        .route("/by-display-name/:display_name", get(get_customer_by_display_name))
        .route(
            "/by-billing-entity/:billing_entity_id",
            get(list_customers_by_billing_entity),
        )
        .route("/exists/:display_name", get(customer_exists))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
        .route("/:id", delete(delete_customer))
}
