use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingEntities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillingEntities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BillingEntities::TaxOrCitizenId)
                            .string_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BillingEntities::EntityType).string().null())
                    .col(
                        ColumnDef::new(BillingEntities::TradeName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BillingEntities::TaxOffice).string().null())
                    .col(
                        ColumnDef::new(BillingEntities::BillingAddress)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingEntities::CurrentBalance)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingEntities::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillingEntities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillingEntities {
    Table,
    Id,
    TaxOrCitizenId,
    EntityType,
    TradeName,
    TaxOffice,
    BillingAddress,
    CurrentBalance,
    IsActive,
}
