use std::sync::Arc;

use crate::catalog::repository::{MemoryStore, PgOrderRepository, PgProductRepository};
use crate::catalog::{OrderService, ProductService};
use crate::db::Database;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<OrderService>,
    pub products: Arc<ProductService>,
    /// PostgreSQL pool, `None` when running on the in-memory store
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(
        orders: Arc<OrderService>,
        products: Arc<ProductService>,
        pg_db: Option<Arc<Database>>,
    ) -> Self {
        Self {
            orders,
            products,
            pg_db,
        }
    }

    /// Services over PostgreSQL repositories sharing one pool
    pub fn with_postgres(db: Arc<Database>) -> Self {
        let pool = db.pool().clone();
        Self::new(
            Arc::new(OrderService::new(Arc::new(PgOrderRepository::new(pool.clone())))),
            Arc::new(ProductService::new(Arc::new(PgProductRepository::new(pool)))),
            Some(db),
        )
    }

    /// Services over one shared in-memory store
    pub fn with_memory(store: MemoryStore) -> Self {
        Self::new(
            Arc::new(OrderService::new(Arc::new(store.orders()))),
            Arc::new(ProductService::new(Arc::new(store.products()))),
            None,
        )
    }

    pub fn store_kind(&self) -> &'static str {
        if self.pg_db.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}
