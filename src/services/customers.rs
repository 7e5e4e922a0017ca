use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::customer;
use crate::errors::ServiceError;
use crate::services::crud::Crud;

/// Service for managing customers
#[derive(Debug, Clone)]
pub struct CustomerService {
    db: Arc<DatabaseConnection>,
}

impl CustomerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Looks up a customer by its unique display name.
    #[instrument(skip(self))]
    pub async fn get_by_display_name(
        &self,
        display_name: &str,
    ) -> Result<Option<customer::Model>, ServiceError> {
        customer::Entity::find()
            .filter(customer::Column::DisplayName.eq(display_name))
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists all active customers.
    #[instrument(skip(self))]
    pub async fn get_active(&self) -> Result<Vec<customer::Model>, ServiceError> {
        customer::Entity::find()
            .filter(customer::Column::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists the customers billed through a given billing entity.
    #[instrument(skip(self))]
    pub async fn get_by_billing_entity(
        &self,
        billing_entity_id: i32,
    ) -> Result<Vec<customer::Model>, ServiceError> {
        customer::Entity::find()
            .filter(customer::Column::BillingEntityId.eq(billing_entity_id))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Checks whether a customer with the given display name exists.
    #[instrument(skip(self))]
    pub async fn exists_by_display_name(&self, display_name: &str) -> Result<bool, ServiceError> {
        let count = customer::Entity::find()
            .filter(customer::Column::DisplayName.eq(display_name))
            .count(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(count > 0)
    }
}

impl Crud for CustomerService {
    type Entity = customer::Entity;
    type ActiveModel = customer::ActiveModel;

    const RESOURCE: &'static str = "customer";

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(existing: customer::Model, incoming: customer::Model) -> customer::ActiveModel {
        customer::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            display_name: Set(incoming.display_name),
            billing_entity_id: Set(incoming.billing_entity_id),
            delivery_address: Set(incoming.delivery_address),
            is_active: Set(incoming.is_active),
        }
    }
}
