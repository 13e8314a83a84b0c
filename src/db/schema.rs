use anyhow::{Context, Result};
use sqlx::PgPool;

pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id   BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    cost DOUBLE PRECISION NOT NULL
)
"#;

pub const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id   BIGSERIAL PRIMARY KEY,
    date TEXT NOT NULL,
    cost DOUBLE PRECISION NOT NULL
)
"#;

/// Junction rows for one order are always rewritten as a whole set.
/// `position` preserves list order and allows the same product twice.
pub const CREATE_ORDER_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS order_product (
    order_id   BIGINT  NOT NULL REFERENCES orders(id)   ON DELETE CASCADE,
    product_id BIGINT  NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    position   INTEGER NOT NULL,
    PRIMARY KEY (order_id, position)
)
"#;

pub const CREATE_ORDER_PRODUCT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_order_product_product ON order_product (product_id)";

/// Create the catalog tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing catalog schema...");

    for (name, ddl) in [
        ("products", CREATE_PRODUCTS_TABLE),
        ("orders", CREATE_ORDERS_TABLE),
        ("order_product", CREATE_ORDER_PRODUCT_TABLE),
        ("idx_order_product_product", CREATE_ORDER_PRODUCT_INDEX),
    ] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create {}", name))?;
    }

    tracing::info!("Catalog schema initialized successfully");
    Ok(())
}
