//! Table definitions and startup initialization.
//!
//! Tables are created with `IF NOT EXISTS` and no database-level foreign keys: product rows may
//! reference categories, brands or stores that do not exist.

use crate::entities::{brand, category, product, store};
use crate::seed::{self, SeedReport};
use sea_orm::sea_query::{ColumnDef, Index, IndexCreateStatement, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbErr};
use tracing::{debug, info};

fn categories_table() -> TableCreateStatement {
    Table::create()
        .table(category::Entity)
        .if_not_exists()
        .col(ColumnDef::new(category::Column::Id).integer().not_null().primary_key())
        .col(ColumnDef::new(category::Column::Name).string().not_null())
        .to_owned()
}

fn brands_table() -> TableCreateStatement {
    Table::create()
        .table(brand::Entity)
        .if_not_exists()
        .col(ColumnDef::new(brand::Column::Id).integer().not_null().primary_key())
        .col(ColumnDef::new(brand::Column::Name).string().not_null())
        .to_owned()
}

fn stores_table() -> TableCreateStatement {
    Table::create()
        .table(store::Entity)
        .if_not_exists()
        .col(ColumnDef::new(store::Column::Id).integer().not_null().primary_key())
        .col(ColumnDef::new(store::Column::Name).string().not_null())
        .col(ColumnDef::new(store::Column::Address).string().null())
        .col(ColumnDef::new(store::Column::Phone).string().null())
        .to_owned()
}

fn product_table() -> TableCreateStatement {
    Table::create()
        .table(product::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(product::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(product::Column::Name).string().not_null())
        .col(ColumnDef::new(product::Column::Stock).integer().not_null())
        .col(ColumnDef::new(product::Column::Price).double().not_null())
        .col(ColumnDef::new(product::Column::AddedDate).date().not_null())
        .col(ColumnDef::new(product::Column::CategoryId).integer().null())
        .col(ColumnDef::new(product::Column::BrandId).integer().null())
        .col(ColumnDef::new(product::Column::StoreId).integer().null())
        .to_owned()
}

fn product_added_date_index() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name("idx_product_added_date")
        .table(product::Entity)
        .col(product::Column::AddedDate)
        .to_owned()
}

/// Creates the four tables, one statement at a time.
///
/// Each statement is awaited before the next is issued, so callers may rely on every table
/// existing once this returns `Ok`.
pub async fn create_tables<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();

    for (name, stmt) in [
        ("categories", categories_table()),
        ("brands", brands_table()),
        ("stores", stores_table()),
        ("product", product_table()),
    ] {
        db.execute(backend.build(&stmt)).await?;
        debug!(table = name, "table ensured");
    }

    db.execute(backend.build(&product_added_date_index())).await?;
    Ok(())
}

/// Ensures the schema exists, then (optionally) the reference rows.
pub async fn initialize<C>(db: &C, with_seed: bool) -> Result<Option<SeedReport>, DbErr>
where
    C: ConnectionTrait,
{
    create_tables(db).await?;
    info!("Database schema ready");

    if !with_seed {
        return Ok(None);
    }

    let report = seed::seed_reference_data(db).await?;
    info!(
        categories = report.categories,
        brands = report.brands,
        stores = report.stores,
        "Reference data seeded"
    );
    Ok(Some(report))
}
