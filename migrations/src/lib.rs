pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_billing_entities_table;
mod m20240601_000002_create_customers_table;
mod m20240601_000003_create_products_table;
mod m20240601_000004_create_sales_table;
mod m20240601_000005_create_sale_details_table;
mod m20240601_000006_create_payments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_billing_entities_table::Migration),
            Box::new(m20240601_000002_create_customers_table::Migration),
            Box::new(m20240601_000003_create_products_table::Migration),
            Box::new(m20240601_000004_create_sales_table::Migration),
            Box::new(m20240601_000005_create_sale_details_table::Migration),
            Box::new(m20240601_000006_create_payments_table::Migration),
        ]
    }
}
