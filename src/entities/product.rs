use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(
    Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema,
)]
#[sea_orm(table_name = "products")]
#[schema(as = Product)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    /// Name used on invoices; distinct from the in-store display name.
    #[validate(length(min = 1, message = "Formal name must not be empty"))]
    pub formal_name: String,

    #[validate(length(min = 1, message = "Display name must not be empty"))]
    pub display_name: String,

    pub unit_price: Decimal,
    pub stock_quantity: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sale_detail::Entity")]
    SaleDetails,
}

impl Related<super::sale_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SaleDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
