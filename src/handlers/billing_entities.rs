use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use validator::Validate;

use crate::entities::billing_entity::Model as BillingEntity;
use crate::errors::ServiceError;
use crate::services::Crud;
use crate::AppState;

async fn list_billing_entities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let entities = state.services.billing_entities.get_all().await?;
    Ok(Json(entities))
}

async fn get_billing_entity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let entity = state
        .services
        .billing_entities
        .get_by_id(id)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("billing entity with id {} not found", id))
        })?;
    Ok(Json(entity))
}

async fn get_billing_entity_by_trade_name(
    State(state): State<AppState>,
    Path(trade_name): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let entity = state
        .services
        .billing_entities
        .get_by_trade_name(&trade_name)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "billing entity with trade name {} not found",
                trade_name
            ))
        })?;
    Ok(Json(entity))
}

async fn list_active_billing_entities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let entities = state.services.billing_entities.get_active().await?;
    Ok(Json(entities))
}

async fn list_billing_entities_by_entity_type(
    State(state): State<AppState>,
    Path(entity_type): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let entities = state
        .services
        .billing_entities
        .get_by_entity_type(&entity_type)
        .await?;
    Ok(Json(entities))
}

async fn billing_entity_exists(
    State(state): State<AppState>,
    Path(tax_or_citizen_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let exists = state
        .services
        .billing_entities
        .exists_by_tax_or_citizen_id(&tax_or_citizen_id)
        .await?;
    Ok(Json(exists))
}

async fn create_billing_entity(
    State(state): State<AppState>,
    Json(entity_info): Json<BillingEntity>,
) -> Result<impl IntoResponse, ServiceError> {
    entity_info.validate()?;
    let created = state.services.billing_entities.create(entity_info).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created)))
}

async fn update_billing_entity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(entity_info): Json<BillingEntity>,
) -> Result<impl IntoResponse, ServiceError> {
    entity_info.validate()?;
    let updated = state
        .services
        .billing_entities
        .update(id, entity_info)
        .await?;
    Ok(Json(updated))
}

async fn delete_billing_entity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.billing_entities.delete_by_id(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn billing_entity_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_billing_entity))
        .route("/", get(list_billing_entities))
        .route("/active", get(list_active_billing_entities))
        .route(
            "/by-trade-name/:trade_name",
            get(get_billing_entity_by_trade_name),
        )
        .route(
            "/by-entity-type/:entity_type",
            get(list_billing_entities_by_entity_type),
        )
        .route("/exists/:tax_or_citizen_id", get(billing_entity_exists))
        .route("/:id", get(get_billing_entity))
        .route("/:id", put(update_billing_entity))
        .route("/:id", delete(delete_billing_entity))
}
