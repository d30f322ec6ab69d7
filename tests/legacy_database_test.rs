use inventory_api::{
    browse::{ProductBrowser, ProductFilter},
    db, schema,
    services::CatalogService,
};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::sync::Arc;

// Tables as created by earlier releases: every non-key column is nullable.
const LEGACY_DDL: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS categories (cid INTEGER PRIMARY KEY, category_name TEXT)",
    "CREATE TABLE IF NOT EXISTS brands (bid INTEGER PRIMARY KEY, bname TEXT)",
    "CREATE TABLE IF NOT EXISTS stores (sid INTEGER PRIMARY KEY, sname TEXT, address TEXT, mobno TEXT)",
    "CREATE TABLE IF NOT EXISTS product (
        pid INTEGER PRIMARY KEY AUTOINCREMENT,
        pname TEXT,
        p_stock INTEGER,
        price REAL,
        added_date TEXT,
        cid INTEGER,
        bid INTEGER,
        sid INTEGER,
        FOREIGN KEY (cid) REFERENCES categories(cid),
        FOREIGN KEY (bid) REFERENCES brands(bid),
        FOREIGN KEY (sid) REFERENCES stores(sid)
    )",
];

const LEGACY_ROWS: [&str; 5] = [
    "INSERT INTO categories VALUES (1, 'Electronics'), (4, NULL)",
    "INSERT INTO brands VALUES (1, 'Apple')",
    "INSERT INTO stores VALUES (1, 'Ram Kumar', 'Katpadi vellore', '9999999999')",
    "INSERT INTO product (pname, p_stock, price, added_date, cid, bid, sid)
        VALUES ('Widget', 10, 9.99, '2024-05-01', 1, 1, 1)",
    "INSERT INTO product (pname, p_stock, price, added_date, cid, bid, sid)
        VALUES (NULL, NULL, NULL, '2024-05-02', 4, NULL, NULL)",
];

async fn legacy_pool() -> DatabaseConnection {
    let pool = db::establish_connection("sqlite::memory:").await.unwrap();
    for sql in LEGACY_DDL.iter().chain(LEGACY_ROWS.iter()) {
        pool.execute_unprepared(sql).await.unwrap();
    }
    pool
}

#[tokio::test]
async fn rows_with_null_fields_are_listed() {
    let pool = legacy_pool().await;

    let report = schema::initialize(&pool, true).await.unwrap().unwrap();
    assert_eq!(report.categories, 2);
    assert_eq!(report.brands, 3);
    assert_eq!(report.stores, 2);

    let catalog = CatalogService::new(Arc::new(pool), false);
    let products = catalog.list_products().await.unwrap();
    assert_eq!(products.len(), 2);

    let blank = &products[0];
    assert_eq!(blank.name, None);
    assert_eq!(blank.stock, None);
    assert_eq!(blank.price, None);
    assert_eq!(blank.category_id, Some(4));
    assert_eq!(blank.category_name, None);

    let widget = &products[1];
    assert_eq!(widget.name.as_deref(), Some("Widget"));
    assert_eq!(widget.stock, Some(10));
    assert_eq!(widget.price, Some(9.99));
    assert_eq!(widget.brand_name.as_deref(), Some("Apple"));

    let categories = catalog.list_categories().await.unwrap();
    let unnamed = categories.iter().find(|c| c.id == 4).unwrap();
    assert_eq!(unnamed.name, None);
}

#[tokio::test]
async fn rows_with_null_fields_render_placeholders() {
    let pool = legacy_pool().await;
    let products = CatalogService::new(Arc::new(pool), false)
        .list_products()
        .await
        .unwrap();

    let browser = ProductBrowser::from_snapshot(products);
    assert_eq!(browser.filtered(&ProductFilter::new("widg")).len(), 1);

    let table = browser.render_filtered(&ProductFilter::default());
    let blank_row = table.lines().nth(1).unwrap();
    assert!(blank_row.contains(" - "));
    assert!(blank_row.contains("2024-05-02"));
    assert!(!blank_row.contains('$'));
}
