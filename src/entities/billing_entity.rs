use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(
    Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema,
)]
#[sea_orm(table_name = "billing_entities")]
#[schema(as = BillingEntity)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    /// Tax number for companies, citizen id for individuals. Unique.
    #[validate(length(
        min = 10,
        max = 11,
        message = "Tax or citizen id must be 10 or 11 characters"
    ))]
    pub tax_or_citizen_id: String,

    pub entity_type: Option<String>,

    #[validate(length(min = 1, message = "Trade name must not be empty"))]
    pub trade_name: String,

    pub tax_office: Option<String>,
    pub billing_address: String,
    pub current_balance: Decimal,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer::Entity")]
    Customers,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
