use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use crate::entities::sale::Model as Sale;
use crate::errors::ServiceError;
use crate::services::Crud;
use crate::AppState;

async fn list_sales(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let sales = state.services.sales.get_all().await?;
    Ok(Json(sales))
}

async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let sale = state
        .services
        .sales
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("sale with id {} not found", id)))?;
    Ok(Json(sale))
}

async fn list_sales_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let sales = state.services.sales.get_by_customer(customer_id).await?;
    Ok(Json(sales))
}

async fn get_sale_by_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let sale = state
        .services
        .sales
        .get_by_invoice_id(&invoice_id)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("sale with invoice id {} not found", invoice_id))
        })?;
    Ok(Json(sale))
}

async fn create_sale(
    State(state): State<AppState>,
    Json(sale_info): Json<Sale>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = state.services.sales.create(sale_info).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created)))
}

async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(sale_info): Json<Sale>,
) -> Result<impl IntoResponse, ServiceError> {
    let updated = state.services.sales.update(id, sale_info).await?;
    Ok(Json(updated))
}

/// Cascades to the sale's line items at the schema level.
async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.sales.delete_by_id(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_sale))
        .route("/", get(list_sales))
        .route("/by-customer/:customer_id", get(list_sales_by_customer))
        .route("/by-invoice/:invoice_id", get(get_sale_by_invoice))
        .route("/:id", get(get_sale))
        .route("/:id", put(update_sale))
        .route("/:id", delete(delete_sale))
}
