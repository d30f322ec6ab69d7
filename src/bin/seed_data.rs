//! Seed data script - creates the tables and loads the reference rows
//!
//! Run with: cargo run --bin seed-data
//!
//! This ensures:
//! - the categories, brands, stores and product tables
//! - 3 categories, 4 brands and 3 stores
//!
//! Safe to re-run: existing rows are left alone.

use anyhow::Context;
use tracing::info;

use inventory_api::{config, db, schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config().context("failed to load configuration")?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    info!("=== Inventory API Seed Data ===");
    info!("Connecting to database: {}", cfg.database_url());

    // Connect eagerly so an unreachable database is reported here, not on the first statement
    let mut db_cfg = db::DbConfig::from(&cfg);
    db_cfg.lazy = false;
    let pool = db::establish_connection_with_config(&db_cfg)
        .await
        .context("failed to connect to database")?;

    let report = schema::initialize(&pool, true)
        .await
        .context("failed to initialize database")?
        .unwrap_or_default();

    info!("  categories inserted: {}", report.categories);
    info!("  brands inserted:     {}", report.brands);
    info!("  stores inserted:     {}", report.stores);
    if report.total() == 0 {
        info!("Reference data was already present");
    }

    db::close_pool(&pool).await.context("failed to close database pool")?;
    info!("=== Seed Data Complete ===");
    Ok(())
}
