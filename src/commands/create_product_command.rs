use crate::{
    commands::Command,
    db::DbPool,
    entities::{brand, category, product, store},
    errors::ServiceError,
};
use chrono::NaiveDate;
use metrics::counter;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};
use validator::Validate;

/// Inserts one product row and yields the stored model.
///
/// By default only the types are checked: dangling references, negative stock and negative
/// prices are stored as given. With [`CreateProductCommand::strict`] the command also rejects
/// blank names, negative or non-finite numbers and references to rows that do not exist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductCommand {
    pub name: String,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
    pub store_id: Option<i32>,
    /// Overrides the server-assigned creation date
    #[serde(default)]
    pub added_date: Option<NaiveDate>,
    #[serde(default)]
    pub strict: bool,
}

impl CreateProductCommand {
    pub fn new(name: impl Into<String>, stock: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            stock,
            price,
            category_id: None,
            brand_id: None,
            store_id: None,
            added_date: None,
            strict: false,
        }
    }

    pub fn with_references(
        mut self,
        category_id: Option<i32>,
        brand_id: Option<i32>,
        store_id: Option<i32>,
    ) -> Self {
        self.category_id = category_id;
        self.brand_id = brand_id;
        self.store_id = store_id;
        self
    }

    pub fn with_added_date(mut self, added_date: NaiveDate) -> Self {
        self.added_date = Some(added_date);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn check_values(&self) -> Result<(), ServiceError> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("pname must not be blank".to_string());
        }
        if !self.price.is_finite() {
            problems.push("price must be a finite number".to_string());
        }
        if let Err(errors) = self.validate() {
            problems.push(errors.to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::ValidationError(problems.join("; ")))
        }
    }

    async fn check_references<C>(&self, db: &C) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut missing = Vec::new();

        if let Some(id) = self.category_id {
            if category::Entity::find_by_id(id).one(db).await?.is_none() {
                missing.push(format!("category {id}"));
            }
        }
        if let Some(id) = self.brand_id {
            if brand::Entity::find_by_id(id).one(db).await?.is_none() {
                missing.push(format!("brand {id}"));
            }
        }
        if let Some(id) = self.store_id {
            if store::Entity::find_by_id(id).one(db).await?.is_none() {
                missing.push(format!("store {id}"));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::ValidationError(format!(
                "unknown references: {}",
                missing.join(", ")
            )))
        }
    }

    fn active_model(&self) -> product::ActiveModel {
        product::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(self.name.clone()),
            stock: Set(self.stock),
            price: Set(self.price),
            added_date: self.added_date.map_or(ActiveValue::NotSet, Set),
            category_id: Set(self.category_id),
            brand_id: Set(self.brand_id),
            store_id: Set(self.store_id),
        }
    }
}

#[async_trait::async_trait]
impl Command for CreateProductCommand {
    type Result = product::Model;

    #[instrument(skip_all)]
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        let db = db_pool.as_ref();

        if self.strict {
            let checked = match self.check_values() {
                Ok(()) => self.check_references(db).await,
                Err(e) => Err(e),
            };
            if let Err(e) = checked {
                counter!("inventory.products.rejected", 1);
                info!(error = %e, "product rejected");
                return Err(e);
            }
        }

        let saved = self.active_model().insert(db).await.map_err(|e| {
            error!("Failed to insert product {}: {}", self.name, e);
            counter!("inventory.products.create_failures", 1);
            ServiceError::from(e)
        })?;

        counter!("inventory.products.created", 1);
        info!(product_id = saved.id, name = %saved.name, added_date = %saved.added_date, "product created");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_checks_are_opt_in() {
        let cmd = CreateProductCommand::new("  ", -5, -1.0);
        assert!(!cmd.strict);
        assert!(cmd.clone().strict(true).strict);
    }

    #[test]
    fn value_checks_collect_every_problem() {
        let err = CreateProductCommand::new(" ", -1, f64::NAN)
            .check_values()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("pname must not be blank"));
        assert!(msg.contains("finite"));
        assert!(msg.contains("stock"));
    }

    #[test]
    fn well_formed_values_pass() {
        assert!(CreateProductCommand::new("Widget", 0, 0.0).check_values().is_ok());
    }

    #[test]
    fn explicit_date_is_carried_into_the_row() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let model = CreateProductCommand::new("Widget", 1, 2.0)
            .with_added_date(date)
            .active_model();
        assert_eq!(model.added_date, Set(date));
        assert_eq!(model.id, ActiveValue::NotSet);

        let model = CreateProductCommand::new("Widget", 1, 2.0).active_model();
        assert_eq!(model.added_date, ActiveValue::NotSet);
    }
}
