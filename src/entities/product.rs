use chrono::{Local, NaiveDate};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product row as stored
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "product")]
#[schema(as = Product)]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key, column_name = "pid")]
    #[serde(rename = "pid")]
    pub id: i32,

    #[sea_orm(column_name = "pname")]
    #[serde(rename = "pname")]
    pub name: String,

    /// Units on hand
    #[sea_orm(column_name = "p_stock")]
    #[serde(rename = "p_stock")]
    pub stock: i32,

    pub price: f64,

    /// Server-local calendar date the product was created
    pub added_date: NaiveDate,

    #[sea_orm(column_name = "cid")]
    #[serde(rename = "cid")]
    pub category_id: Option<i32>,

    #[sea_orm(column_name = "bid")]
    #[serde(rename = "bid")]
    pub brand_id: Option<i32>,

    #[sea_orm(column_name = "sid")]
    #[serde(rename = "sid")]
    pub store_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id"
    )]
    Store,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

/// Today's date on the server clock, in the server's local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            if let ActiveValue::NotSet = active_model.added_date {
                active_model.added_date = Set(today());
            }
        } else {
            // added_date is written once at creation
            active_model.added_date = ActiveValue::NotSet;
        }

        Ok(active_model)
    }
}
