use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_billing_entities_table::BillingEntities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Customers::DisplayName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Customers::BillingEntityId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::DeliveryAddress)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_billing_entity_id")
                            .from(Customers::Table, Customers::BillingEntityId)
                            .to(BillingEntities::Table, BillingEntities::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    Id,
    DisplayName,
    BillingEntityId,
    DeliveryAddress,
    IsActive,
}
