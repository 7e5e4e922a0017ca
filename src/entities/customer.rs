use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(
    Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema,
)]
#[sea_orm(table_name = "customers")]
#[schema(as = Customer)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, message = "Display name must not be empty"))]
    pub display_name: String,

    pub billing_entity_id: i32,
    pub delivery_address: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billing_entity::Entity",
        from = "Column::BillingEntityId",
        to = "super::billing_entity::Column::Id"
    )]
    BillingEntity,
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::billing_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillingEntity.def()
    }
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
