use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "sales")]
#[schema(as = Sale)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    pub customer_id: i32,
    pub order_date: DateTime<Utc>,

    /// Not unique in the schema but used as a lookup key.
    pub invoice_id: Option<String>,

    pub total_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::sale_detail::Entity")]
    SaleDetails,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::sale_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SaleDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
