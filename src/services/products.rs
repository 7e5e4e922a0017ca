use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::product;
use crate::errors::ServiceError;
use crate::services::crud::Crud;

/// Service for managing products
#[derive(Debug, Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Looks up a product by its unique formal (invoice) name.
    #[instrument(skip(self))]
    pub async fn get_by_formal_name(
        &self,
        formal_name: &str,
    ) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::FormalName.eq(formal_name))
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Looks up a product by its unique display name.
    #[instrument(skip(self))]
    pub async fn get_by_display_name(
        &self,
        display_name: &str,
    ) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::DisplayName.eq(display_name))
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists all active products.
    #[instrument(skip(self))]
    pub async fn get_active(&self) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Checks whether a product with the given display name exists.
    #[instrument(skip(self))]
    pub async fn exists_by_display_name(&self, display_name: &str) -> Result<bool, ServiceError> {
        let count = product::Entity::find()
            .filter(product::Column::DisplayName.eq(display_name))
            .count(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(count > 0)
    }
}

impl Crud for ProductService {
    type Entity = product::Entity;
    type ActiveModel = product::ActiveModel;

    const RESOURCE: &'static str = "product";

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(existing: product::Model, incoming: product::Model) -> product::ActiveModel {
        product::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            formal_name: Set(incoming.formal_name),
            display_name: Set(incoming.display_name),
            unit_price: Set(incoming.unit_price),
            stock_quantity: Set(incoming.stock_quantity),
            is_active: Set(incoming.is_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sea_orm::ActiveValue;

    #[test]
    fn merge_overwrites_every_field_but_the_id() {
        let existing = product::Model {
            id: 3,
            formal_name: "Widget".into(),
            display_name: "Widget X".into(),
            unit_price: dec!(10.00),
            stock_quantity: 100,
            is_active: true,
        };
        let incoming = product::Model {
            id: 0,
            formal_name: "Widget".into(),
            display_name: "Widget XL".into(),
            unit_price: dec!(12.50),
            stock_quantity: 80,
            is_active: false,
        };

        let merged = ProductService::merge(existing, incoming);

        assert_eq!(merged.id, ActiveValue::Unchanged(3));
        assert_eq!(merged.display_name, ActiveValue::Set("Widget XL".into()));
        assert_eq!(merged.unit_price, ActiveValue::Set(dec!(12.50)));
        assert_eq!(merged.stock_quantity, ActiveValue::Set(80));
        assert_eq!(merged.is_active, ActiveValue::Set(false));
    }
}
