use sea_orm_migration::prelude::*;

use super::m20240601_000002_create_customers_table::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Sales::OrderDate).timestamp().not_null())
                    .col(ColumnDef::new(Sales::InvoiceId).string().null())
                    .col(ColumnDef::new(Sales::TotalAmount).decimal().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_customer_id")
                            .from(Sales::Table, Sales::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // invoice_id is a lookup key but intentionally not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_sales_invoice_id")
                    .table(Sales::Table)
                    .col(Sales::InvoiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sales {
    Table,
    Id,
    CustomerId,
    OrderDate,
    InvoiceId,
    TotalAmount,
}
