use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::billing_entity;
use crate::errors::ServiceError;
use crate::services::crud::Crud;

/// Service for managing billing entities
#[derive(Debug, Clone)]
pub struct BillingEntityService {
    db: Arc<DatabaseConnection>,
}

impl BillingEntityService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Looks up a billing entity by its trade name.
    #[instrument(skip(self))]
    pub async fn get_by_trade_name(
        &self,
        trade_name: &str,
    ) -> Result<Option<billing_entity::Model>, ServiceError> {
        billing_entity::Entity::find()
            .filter(billing_entity::Column::TradeName.eq(trade_name))
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists all active billing entities.
    #[instrument(skip(self))]
    pub async fn get_active(&self) -> Result<Vec<billing_entity::Model>, ServiceError> {
        billing_entity::Entity::find()
            .filter(billing_entity::Column::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists billing entities of a given type (e.g. company, individual).
    #[instrument(skip(self))]
    pub async fn get_by_entity_type(
        &self,
        entity_type: &str,
    ) -> Result<Vec<billing_entity::Model>, ServiceError> {
        billing_entity::Entity::find()
            .filter(billing_entity::Column::EntityType.eq(entity_type))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Checks whether a billing entity with the given tax or citizen id exists.
    #[instrument(skip(self))]
    pub async fn exists_by_tax_or_citizen_id(
        &self,
        tax_or_citizen_id: &str,
    ) -> Result<bool, ServiceError> {
        let count = billing_entity::Entity::find()
            .filter(billing_entity::Column::TaxOrCitizenId.eq(tax_or_citizen_id))
            .count(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(count > 0)
    }
}

impl Crud for BillingEntityService {
    type Entity = billing_entity::Entity;
    type ActiveModel = billing_entity::ActiveModel;

    const RESOURCE: &'static str = "billing entity";

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(
        existing: billing_entity::Model,
        incoming: billing_entity::Model,
    ) -> billing_entity::ActiveModel {
        billing_entity::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            tax_or_citizen_id: Set(incoming.tax_or_citizen_id),
            entity_type: Set(incoming.entity_type),
            trade_name: Set(incoming.trade_name),
            tax_office: Set(incoming.tax_office),
            billing_address: Set(incoming.billing_address),
            current_balance: Set(incoming.current_balance),
            is_active: Set(incoming.is_active),
        }
    }
}
