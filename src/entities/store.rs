use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store (supplier) a product is sourced from
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "stores")]
#[schema(as = Store, example = json!({
    "sid": 1, "sname": "Ram Kumar", "address": "Katpadi vellore", "mobno": "9999999999"
}))]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "sid")]
    #[serde(rename = "sid")]
    pub id: i32,

    #[sea_orm(column_name = "sname")]
    #[serde(rename = "sname")]
    pub name: Option<String>,

    pub address: Option<String>,

    /// Contact number
    #[sea_orm(column_name = "mobno")]
    #[serde(rename = "mobno")]
    pub phone: Option<String>,
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
