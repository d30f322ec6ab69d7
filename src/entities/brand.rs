use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product brand
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "brands")]
#[schema(as = Brand, example = json!({"bid": 1, "bname": "Apple"}))]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "bid")]
    #[serde(rename = "bid")]
    pub id: i32,

    #[sea_orm(column_name = "bname")]
    #[serde(rename = "bname")]
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
