use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::sale_detail;
use crate::errors::ServiceError;
use crate::services::crud::Crud;

/// Service for managing sale line items
#[derive(Debug, Clone)]
pub struct SaleDetailService {
    db: Arc<DatabaseConnection>,
}

impl SaleDetailService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists the line items of a sale.
    #[instrument(skip(self))]
    pub async fn get_by_sale(&self, sale_id: i32) -> Result<Vec<sale_detail::Model>, ServiceError> {
        sale_detail::Entity::find()
            .filter(sale_detail::Column::SaleId.eq(sale_id))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists every line item that sold a given product.
    #[instrument(skip(self))]
    pub async fn get_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<sale_detail::Model>, ServiceError> {
        sale_detail::Entity::find()
            .filter(sale_detail::Column::ProductId.eq(product_id))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }
}

impl Crud for SaleDetailService {
    type Entity = sale_detail::Entity;
    type ActiveModel = sale_detail::ActiveModel;

    const RESOURCE: &'static str = "sale detail";

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(existing: sale_detail::Model, incoming: sale_detail::Model) -> sale_detail::ActiveModel {
        sale_detail::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            sale_id: Set(incoming.sale_id),
            product_id: Set(incoming.product_id),
            quantity: Set(incoming.quantity),
            unit_price: Set(incoming.unit_price),
            total_price: Set(incoming.total_price),
        }
    }
}
