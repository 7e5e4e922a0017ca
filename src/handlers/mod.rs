pub mod billing_entities;
pub mod customers;
pub mod health;
pub mod payments;
pub mod products;
pub mod sale_details;
pub mod sales;

use std::sync::Arc;

use crate::db::DbPool;
use crate::services::{
    BillingEntityService, CustomerService, PaymentService, ProductService, SaleDetailService,
    SaleService,
};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Container for the entity services used by the HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub billing_entities: Arc<BillingEntityService>,
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub sales: Arc<SaleService>,
    pub sale_details: Arc<SaleDetailService>,
    pub payments: Arc<PaymentService>,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            billing_entities: Arc::new(BillingEntityService::new(db.clone())),
            customers: Arc::new(CustomerService::new(db.clone())),
            products: Arc::new(ProductService::new(db.clone())),
            sales: Arc::new(SaleService::new(db.clone())),
            sale_details: Arc::new(SaleDetailService::new(db.clone())),
            payments: Arc::new(PaymentService::new(db)),
        }
    }
}
