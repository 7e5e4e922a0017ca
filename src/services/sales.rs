use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::sale;
use crate::errors::ServiceError;
use crate::services::crud::Crud;

/// Service for managing sales
#[derive(Debug, Clone)]
pub struct SaleService {
    db: Arc<DatabaseConnection>,
}

impl SaleService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists the sales recorded for a customer.
    #[instrument(skip(self))]
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<sale::Model>, ServiceError> {
        sale::Entity::find()
            .filter(sale::Column::CustomerId.eq(customer_id))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Looks up a sale by invoice id. The column is not unique; the first
    /// match wins.
    #[instrument(skip(self))]
    pub async fn get_by_invoice_id(
        &self,
        invoice_id: &str,
    ) -> Result<Option<sale::Model>, ServiceError> {
        sale::Entity::find()
            .filter(sale::Column::InvoiceId.eq(invoice_id))
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }
}

impl Crud for SaleService {
    type Entity = sale::Entity;
    type ActiveModel = sale::ActiveModel;

    const RESOURCE: &'static str = "sale";

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(existing: sale::Model, incoming: sale::Model) -> sale::ActiveModel {
        sale::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            customer_id: Set(incoming.customer_id),
            order_date: Set(incoming.order_date),
            invoice_id: Set(incoming.invoice_id),
            total_amount: Set(incoming.total_amount),
        }
    }
}
