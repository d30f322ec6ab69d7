//! Fixed reference data: categories, brands and stores.
//!
//! Rows are inserted with `ON CONFLICT (id) DO NOTHING`, so running the loader any number of
//! times leaves exactly one row per id.

use crate::entities::{brand, category, store};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Set};
use serde::Serialize;

pub const CATEGORIES: [(i32, &str); 3] = [(1, "Electronics"), (2, "Clothing"), (3, "Grocery")];

pub const BRANDS: [(i32, &str); 4] = [(1, "Apple"), (2, "Samsung"), (3, "Nike"), (4, "Fortune")];

pub const STORES: [(i32, &str, &str, &str); 3] = [
    (1, "Ram Kumar", "Katpadi vellore", "9999999999"),
    (2, "Rakesh Kumar", "Chennai", "8888555541"),
    (3, "Suraj", "Haryana", "7777555541"),
];

/// Rows newly inserted by one seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub categories: u64,
    pub brands: u64,
    pub stores: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.categories + self.brands + self.stores
    }
}

/// Inserts any missing reference rows; existing ids are left untouched.
pub async fn seed_reference_data<C>(db: &C) -> Result<SeedReport, DbErr>
where
    C: ConnectionTrait,
{
    let categories = category::Entity::insert_many(CATEGORIES.iter().map(|(id, name)| {
        category::ActiveModel {
            id: Set(*id),
            name: Set(Some(name.to_string())),
        }
    }))
    .on_conflict(
        OnConflict::column(category::Column::Id)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(db)
    .await?;

    let brands = brand::Entity::insert_many(BRANDS.iter().map(|(id, name)| brand::ActiveModel {
        id: Set(*id),
        name: Set(Some(name.to_string())),
    }))
    .on_conflict(OnConflict::column(brand::Column::Id).do_nothing().to_owned())
    .exec_without_returning(db)
    .await?;

    let stores = store::Entity::insert_many(STORES.iter().map(|(id, name, address, phone)| {
        store::ActiveModel {
            id: Set(*id),
            name: Set(Some(name.to_string())),
            address: Set(Some(address.to_string())),
            phone: Set(Some(phone.to_string())),
        }
    }))
    .on_conflict(OnConflict::column(store::Column::Id).do_nothing().to_owned())
    .exec_without_returning(db)
    .await?;

    Ok(SeedReport {
        categories,
        brands,
        stores,
    })
}
