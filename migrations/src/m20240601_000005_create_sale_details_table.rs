use sea_orm_migration::prelude::*;

use super::m20240601_000003_create_products_table::Products;
use super::m20240601_000004_create_sales_table::Sales;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SaleDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SaleDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SaleDetails::SaleId).integer().not_null())
                    .col(ColumnDef::new(SaleDetails::ProductId).integer().not_null())
                    .col(ColumnDef::new(SaleDetails::Quantity).integer().not_null())
                    .col(ColumnDef::new(SaleDetails::UnitPrice).decimal().not_null())
                    .col(ColumnDef::new(SaleDetails::TotalPrice).decimal().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_details_sale_id")
                            .from(SaleDetails::Table, SaleDetails::SaleId)
                            .to(Sales::Table, Sales::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_details_product_id")
                            .from(SaleDetails::Table, SaleDetails::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaleDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SaleDetails {
    Table,
    Id,
    SaleId,
    ProductId,
    Quantity,
    UnitPrice,
    TotalPrice,
}
