use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use validator::Validate;

use crate::entities::product::{self, Model as Product};
use crate::errors::{ErrorResponse, ServiceError};
use crate::services::Crud;
use crate::AppState;

/// List every product
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [product::Model])
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let products = state.services.products.get_all().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = product::Model),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let found = state
        .services
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("product with id {} not found", id)))?;
    Ok(Json(found))
}

/// Get a product by formal name
#[utoipa::path(
    get,
    path = "/api/products/by-formal-name/{formal_name}",
    params(("formal_name" = String, Path, description = "Unique invoice name")),
    responses(
        (status = 200, description = "Product found", body = product::Model),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_formal_name(
    State(state): State<AppState>,
    Path(formal_name): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let found = state
        .services
        .products
        .get_by_formal_name(&formal_name)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "product with formal name {} not found",
                formal_name
            ))
        })?;
    Ok(Json(found))
}

/// Get a product by display name
#[utoipa::path(
    get,
    path = "/api/products/by-display-name/{display_name}",
    params(("display_name" = String, Path, description = "Unique display name")),
    responses(
        (status = 200, description = "Product found", body = product::Model),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_display_name(
    State(state): State<AppState>,
    Path(display_name): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let found = state
        .services
        .products
        .get_by_display_name(&display_name)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "product with display name {} not found",
                display_name
            ))
        })?;
    Ok(Json(found))
}

/// List active products
#[utoipa::path(
    get,
    path = "/api/products/active",
    responses(
        (status = 200, description = "Active products", body = [product::Model])
    ),
    tag = "Products"
)]
pub async fn list_active_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let products = state.services.products.get_active().await?;
    Ok(Json(products))
}

/// Check product existence by display name
#[utoipa::path(
    get,
    path = "/api/products/exists/{display_name}",
    params(("display_name" = String, Path, description = "Unique display name")),
    responses(
        (status = 200, description = "Existence flag", body = bool)
    ),
    tag = "Products"
)]
pub async fn product_exists(
    State(state): State<AppState>,
    Path(display_name): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let exists = state
        .services
        .products
        .exists_by_display_name(&display_name)
        .await?;
    Ok(Json(exists))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = product::Model,
    responses(
        (status = 201, description = "Product created", body = product::Model),
        (status = 409, description = "Duplicate name", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(product_info): Json<Product>,
) -> Result<impl IntoResponse, ServiceError> {
    product_info.validate()?;
    let created = state.services.products.create(product_info).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created)))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = product::Model,
    responses(
        (status = 200, description = "Product replaced", body = product::Model),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(product_info): Json<Product>,
) -> Result<impl IntoResponse, ServiceError> {
    product_info.validate()?;
    let updated = state.services.products.update(id, product_info).await?;
    Ok(Json(updated))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted (also when absent)"),
        (status = 409, description = "Referenced by sale details", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.products.delete_by_id(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/", get(list_products))
        .route("/active", get(list_active_products))
        .route("/by-formal-name/:formal_name", get(get_product_by_formal_name))
        .route(
            "/by-display-name/:display_name",
            get(get_product_by_display_name),
        )
        .route("/exists/:display_name", get(product_exists))
        .route("/:id", get(get_product))
        .route("/:id", put(update_product))
        .route("/:id", delete(delete_product))
}
