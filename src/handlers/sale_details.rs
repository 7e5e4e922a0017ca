use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use crate::entities::sale_detail::Model as SaleDetail;
use crate::errors::ServiceError;
use crate::services::Crud;
use crate::AppState;

async fn list_sale_details(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.sale_details.get_all().await?;
    Ok(Json(details))
}

async fn get_sale_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let detail = state
        .services
        .sale_details
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("sale detail with id {} not found", id)))?;
    Ok(Json(detail))
}

async fn list_sale_details_by_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.sale_details.get_by_sale(sale_id).await?;
    Ok(Json(details))
}

async fn list_sale_details_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state
        .services
        .sale_details
        .get_by_product(product_id)
        .await?;
    Ok(Json(details))
}

async fn create_sale_detail(
    State(state): State<AppState>,
    Json(detail_info): Json<SaleDetail>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = state.services.sale_details.create(detail_info).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created)))
}

async fn update_sale_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(detail_info): Json<SaleDetail>,
) -> Result<impl IntoResponse, ServiceError> {
    let updated = state.services.sale_details.update(id, detail_info).await?;
    Ok(Json(updated))
}

async fn delete_sale_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.sale_details.delete_by_id(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn sale_detail_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_sale_detail))
        .route("/", get(list_sale_details))
        .route("/sale/:sale_id", get(list_sale_details_by_sale))
        .route("/product/:product_id", get(list_sale_details_by_product))
        .route("/:id", get(get_sale_detail))
        .route("/:id", put(update_sale_detail))
        .route("/:id", delete(delete_sale_detail))
}
