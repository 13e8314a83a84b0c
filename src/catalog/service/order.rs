//! Order Service - order lifecycle and its product relation
//!
//! Takes and returns transfer objects; works on stored entities internally.
//! Store faults propagate unchanged, not-found is `None` / `false`.

use crate::catalog::dto::{OrderDto, ProductDto};
use crate::catalog::error::StoreResult;
use crate::catalog::models::{Order, Product, ProductEdit};
use crate::catalog::repository::DynOrderRepository;

pub struct OrderService {
    orders: DynOrderRepository,
}

impl OrderService {
    pub fn new(orders: DynOrderRepository) -> Self {
        Self { orders }
    }

    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<OrderDto>> {
        tracing::info!(order_id = id, "Getting order by ID");
        Ok(self.orders.find_by_id(id).await?.map(OrderDto::from))
    }

    pub async fn get_all(&self) -> StoreResult<Vec<OrderDto>> {
        tracing::info!("Getting all orders");
        let orders = self.orders.find_all().await?;
        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Persist a new order. Its products are inserted (no id) or merged (id set).
    pub async fn create(&self, dto: OrderDto) -> StoreResult<OrderDto> {
        tracing::info!(date = %dto.date, cost = dto.cost, products = dto.products.len(), "Adding new order");
        let order = Order {
            id: None,
            ..Order::from(dto)
        };
        let saved = self.orders.save(order).await?;
        Ok(saved.into())
    }

    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        tracing::info!(order_id = id, "Deleting order");
        self.orders.delete_by_id(id).await
    }

    /// Append a freshly inserted product built from `dto`; any id it carries is ignored
    pub async fn add_product(
        &self,
        order_id: i64,
        dto: ProductDto,
    ) -> StoreResult<Option<OrderDto>> {
        tracing::info!(order_id, name = %dto.name, cost = dto.cost, "Adding product to order");
        let product = Product {
            id: None,
            ..Product::from(dto)
        };
        self.edit(order_id, ProductEdit::Append(product)).await
    }

    /// Drop every member with `product_id`; a non-member is a no-op
    pub async fn remove_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> StoreResult<Option<OrderDto>> {
        tracing::info!(order_id, product_id, "Deleting product from order");
        self.edit(order_id, ProductEdit::Remove(product_id)).await
    }

    pub async fn clear(&self, order_id: i64) -> StoreResult<Option<OrderDto>> {
        tracing::info!(order_id, "Clearing order");
        self.edit(order_id, ProductEdit::Clear).await
    }

    /// `None` means the order does not exist; an empty order yields `Some(vec![])`
    pub async fn list_products(&self, order_id: i64) -> StoreResult<Option<Vec<ProductDto>>> {
        tracing::info!(order_id, "Getting all products in order");
        let order = self.orders.find_by_id(order_id).await?;
        Ok(order.map(|o| o.products.into_iter().map(ProductDto::from).collect()))
    }

    async fn edit(&self, order_id: i64, edit: ProductEdit) -> StoreResult<Option<OrderDto>> {
        let op = edit.name();
        let updated = self.orders.update_products(order_id, edit).await?;
        match &updated {
            Some(order) => tracing::debug!(order_id, op, products = order.products.len(), "Order products updated"),
            None => tracing::debug!(order_id, op, "Order not found"),
        }
        Ok(updated.map(OrderDto::from))
    }
}
