use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::payment;
use crate::errors::ServiceError;
use crate::services::crud::Crud;

/// Service for managing customer payments
#[derive(Debug, Clone)]
pub struct PaymentService {
    db: Arc<DatabaseConnection>,
}

impl PaymentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists the payments made by a customer.
    #[instrument(skip(self))]
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<payment::Model>, ServiceError> {
        payment::Entity::find()
            .filter(payment::Column::CustomerId.eq(customer_id))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// Lists payments by method (cash, wire, cheque, ...).
    #[instrument(skip(self))]
    pub async fn get_by_method(&self, method: &str) -> Result<Vec<payment::Model>, ServiceError> {
        payment::Entity::find()
            .filter(payment::Column::Method.eq(method))
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)
    }
}

impl Crud for PaymentService {
    type Entity = payment::Entity;
    type ActiveModel = payment::ActiveModel;

    const RESOURCE: &'static str = "payment";

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(existing: payment::Model, incoming: payment::Model) -> payment::ActiveModel {
        payment::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            customer_id: Set(incoming.customer_id),
            payment_date: Set(incoming.payment_date),
            amount: Set(incoming.amount),
            method: Set(incoming.method),
            reference_code: Set(incoming.reference_code),
            notes: Set(incoming.notes),
        }
    }
}
