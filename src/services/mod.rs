pub mod billing_entities;
pub mod crud;
pub mod customers;
pub mod payments;
pub mod products;
pub mod sale_details;
pub mod sales;

pub use billing_entities::BillingEntityService;
pub use crud::Crud;
pub use customers::CustomerService;
pub use payments::PaymentService;
pub use products::ProductService;
pub use sale_details::SaleDetailService;
pub use sales::SaleService;
