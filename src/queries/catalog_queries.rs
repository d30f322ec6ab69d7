use crate::{
    entities::{brand, category, product, store, Brand, Category, Store},
    errors::ServiceError,
    queries::Query,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product joined with the names of its category, brand and store.
///
/// The name fields are `None` when the product's key is null or points at a row that does
/// not exist. Name, stock and price are nullable in databases written by earlier releases.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "pid": 1,
    "pname": "Widget",
    "p_stock": 10,
    "price": 9.99,
    "added_date": "2024-05-01",
    "cid": 1,
    "bid": 1,
    "sid": 1,
    "category_name": "Electronics",
    "brand_name": "Apple",
    "store_name": "Ram Kumar"
}))]
pub struct ProductView {
    #[serde(rename = "pid")]
    pub id: i32,
    #[serde(rename = "pname")]
    pub name: Option<String>,
    #[serde(rename = "p_stock")]
    pub stock: Option<i32>,
    pub price: Option<f64>,
    pub added_date: NaiveDate,
    #[serde(rename = "cid")]
    pub category_id: Option<i32>,
    #[serde(rename = "bid")]
    pub brand_id: Option<i32>,
    #[serde(rename = "sid")]
    pub store_id: Option<i32>,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
    pub store_name: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListCategoriesQuery;

#[async_trait]
impl Query for ListCategoriesQuery {
    type Result = Vec<Category>;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        Ok(category::Entity::find().all(db_pool).await?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListBrandsQuery;

#[async_trait]
impl Query for ListBrandsQuery {
    type Result = Vec<Brand>;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        Ok(brand::Entity::find().all(db_pool).await?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListStoresQuery;

#[async_trait]
impl Query for ListStoresQuery {
    type Result = Vec<Store>;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        Ok(store::Entity::find().all(db_pool).await?)
    }
}

/// Every product with its reference names, newest first
#[derive(Debug, Default, Clone, Copy)]
pub struct ListProductsQuery;

#[async_trait]
impl Query for ListProductsQuery {
    type Result = Vec<ProductView>;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        let rows = product::Entity::find()
            .select_only()
            .column_as(product::Column::Id, "id")
            .column_as(product::Column::Name, "name")
            .column_as(product::Column::Stock, "stock")
            .column_as(product::Column::Price, "price")
            .column_as(product::Column::AddedDate, "added_date")
            .column_as(product::Column::CategoryId, "category_id")
            .column_as(product::Column::BrandId, "brand_id")
            .column_as(product::Column::StoreId, "store_id")
            .column_as(category::Column::Name, "category_name")
            .column_as(brand::Column::Name, "brand_name")
            .column_as(store::Column::Name, "store_name")
            .join(JoinType::LeftJoin, product::Relation::Category.def())
            .join(JoinType::LeftJoin, product::Relation::Brand.def())
            .join(JoinType::LeftJoin, product::Relation::Store.def())
            .order_by_desc(product::Column::AddedDate)
            .order_by_desc(product::Column::Id)
            .into_model::<ProductView>()
            .all(db_pool)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn product_listing_left_joins_every_reference_table() {
        let sql = product::Entity::find()
            .select_only()
            .column_as(category::Column::Name, "category_name")
            .join(JoinType::LeftJoin, product::Relation::Category.def())
            .join(JoinType::LeftJoin, product::Relation::Brand.def())
            .join(JoinType::LeftJoin, product::Relation::Store.def())
            .order_by_desc(product::Column::AddedDate)
            .order_by_desc(product::Column::Id)
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains("LEFT JOIN \"categories\""));
        assert!(sql.contains("LEFT JOIN \"brands\""));
        assert!(sql.contains("LEFT JOIN \"stores\""));
        assert!(sql.contains("ORDER BY \"product\".\"added_date\" DESC, \"product\".\"pid\" DESC"));
    }

    #[test]
    fn product_view_uses_wire_names() {
        let view = ProductView {
            id: 7,
            name: Some("Widget".into()),
            stock: Some(3),
            price: Some(1.5),
            added_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category_id: Some(9999),
            brand_id: None,
            store_id: Some(1),
            category_name: None,
            brand_name: None,
            store_name: Some("Ram Kumar".into()),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["pid"], 7);
        assert_eq!(json["pname"], "Widget");
        assert_eq!(json["p_stock"], 3);
        assert_eq!(json["added_date"], "2024-05-01");
        assert_eq!(json["cid"], 9999);
        assert!(json["bid"].is_null());
        assert!(json["category_name"].is_null());
        assert_eq!(json["store_name"], "Ram Kumar");
    }
}
