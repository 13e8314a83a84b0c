//! In-process store with the same semantics as the PostgreSQL backend.
//!
//! Used when no database is configured, and by tests. One mutex guards all
//! three tables, so every operation is atomic.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{OrderRepository, ProductRepository};
use crate::catalog::error::{StoreError, StoreResult};
use crate::catalog::models::{Order, Product, ProductEdit};

#[derive(Debug)]
struct OrderRow {
    date: String,
    cost: f64,
}

#[derive(Debug, Default)]
struct Tables {
    last_product_id: i64,
    last_order_id: i64,
    products: BTreeMap<i64, Product>,
    orders: BTreeMap<i64, OrderRow>,
    /// order id -> product ids in list order
    links: HashMap<i64, Vec<i64>>,
}

impl Tables {
    fn save_product(&mut self, product: Product) -> Product {
        let id = match product.id {
            Some(id) if self.products.contains_key(&id) => id,
            _ => {
                self.last_product_id += 1;
                self.last_product_id
            }
        };
        let product = Product {
            id: Some(id),
            ..product
        };
        self.products.insert(id, product.clone());
        product
    }

    fn members(&self, order_id: i64) -> Vec<Product> {
        self.links
            .get(&order_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.products.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn load_order(&self, order_id: i64) -> Option<Order> {
        self.orders.get(&order_id).map(|row| Order {
            id: Some(order_id),
            date: row.date.clone(),
            cost: row.cost,
            products: self.members(order_id),
        })
    }

    fn write_links(&mut self, order_id: i64, products: &[Product]) -> StoreResult<()> {
        if !self.orders.contains_key(&order_id) {
            return Err(StoreError::OrderMissing(order_id));
        }

        let mut ids = Vec::with_capacity(products.len());
        for product in products {
            let id = product.id.ok_or(StoreError::Unsaved { order_id })?;
            if !self.products.contains_key(&id) {
                return Err(StoreError::ProductMissing(id));
            }
            ids.push(id);
        }

        self.links.insert(order_id, ids);
        Ok(())
    }

    fn save_order(&mut self, order: Order) -> StoreResult<Order> {
        let order_id = match order.id {
            Some(id) if self.orders.contains_key(&id) => id,
            _ => {
                self.last_order_id += 1;
                self.last_order_id
            }
        };
        self.orders.insert(
            order_id,
            OrderRow {
                date: order.date.clone(),
                cost: order.cost,
            },
        );

        let products: Vec<Product> = order
            .products
            .into_iter()
            .map(|p| self.save_product(p))
            .collect();
        self.write_links(order_id, &products)?;

        Ok(Order {
            id: Some(order_id),
            date: order.date,
            cost: order.cost,
            products,
        })
    }
}

/// Shared in-memory tables. Cloning shares the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> MemoryOrderRepository {
        MemoryOrderRepository {
            store: self.clone(),
        }
    }

    pub fn products(&self) -> MemoryProductRepository {
        MemoryProductRepository {
            store: self.clone(),
        }
    }

    // No code panics while holding the lock, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct MemoryProductRepository {
    store: MemoryStore,
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        Ok(self.store.lock().products.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.store.lock().products.values().cloned().collect())
    }

    async fn save(&self, product: Product) -> StoreResult<Product> {
        Ok(self.store.lock().save_product(product))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.store.lock();
        if tables.products.remove(&id).is_none() {
            return Ok(false);
        }
        for ids in tables.links.values_mut() {
            ids.retain(|pid| *pid != id);
        }
        Ok(true)
    }
}

pub struct MemoryOrderRepository {
    store: MemoryStore,
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Order>> {
        Ok(self.store.lock().load_order(id))
    }

    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        let tables = self.store.lock();
        Ok(tables
            .orders
            .keys()
            .filter_map(|id| tables.load_order(*id))
            .collect())
    }

    async fn save(&self, order: Order) -> StoreResult<Order> {
        self.store.lock().save_order(order)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.store.lock();
        tables.links.remove(&id);
        Ok(tables.orders.remove(&id).is_some())
    }

    async fn replace_products(&self, order_id: i64, products: &[Product]) -> StoreResult<()> {
        self.store.lock().write_links(order_id, products)
    }

    async fn list_products(&self, order_id: i64) -> StoreResult<Vec<Product>> {
        Ok(self.store.lock().members(order_id))
    }

    async fn update_products(
        &self,
        order_id: i64,
        edit: ProductEdit,
    ) -> StoreResult<Option<Order>> {
        let mut tables = self.store.lock();
        let Some(mut order) = tables.load_order(order_id) else {
            return Ok(None);
        };
        edit.apply(&mut order.products);
        tables.save_order(order).map(Some)
    }
}
