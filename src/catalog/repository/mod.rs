//! Persistence gateway
//!
//! Entity-level CRUD plus whole-list replacement of an order's products.
//! Two backends share these traits: PostgreSQL and an in-process store.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryOrderRepository, MemoryProductRepository, MemoryStore};
pub use postgres::{PgOrderRepository, PgProductRepository};

use std::sync::Arc;

use async_trait::async_trait;

use super::error::StoreResult;
use super::models::{Order, Product, ProductEdit};

pub type DynProductRepository = Arc<dyn ProductRepository>;
pub type DynOrderRepository = Arc<dyn OrderRepository>;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// A miss is `Ok(None)`
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>>;

    /// All products in storage order
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// Insert when `id` is unset, update otherwise. Returns the product with its id.
    async fn save(&self, product: Product) -> StoreResult<Product>;

    /// Returns whether a row was removed. Memberships in orders go with it.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;

    async fn delete(&self, product: &Product) -> StoreResult<bool> {
        match product.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// A miss is `Ok(None)`
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Order>>;

    /// All orders in storage order, each with its products
    async fn find_all(&self) -> StoreResult<Vec<Order>>;

    /// Insert or update the order row, then cascade to its products:
    /// unsaved products are inserted, saved ones merged, and the junction rows
    /// replaced by the full list. One transaction.
    async fn save(&self, order: Order) -> StoreResult<Order>;

    /// Returns whether a row was removed. Junction rows cascade, products stay.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;

    async fn delete(&self, order: &Order) -> StoreResult<bool> {
        match order.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }

    /// Overwrite the junction rows of `order_id` with exactly `products`.
    /// Every product must already carry an id.
    async fn replace_products(&self, order_id: i64, products: &[Product]) -> StoreResult<()>;

    /// Current members of an order, in list order
    async fn list_products(&self, order_id: i64) -> StoreResult<Vec<Product>>;

    /// Read-modify-write of the product list under a lock on the order.
    /// `Ok(None)` when the order does not exist.
    async fn update_products(&self, order_id: i64, edit: ProductEdit)
    -> StoreResult<Option<Order>>;
}
