//! HTTP handlers. Thin adapters over the catalog services.

pub mod health;
pub mod order;
pub mod product;

pub use health::{HealthResponse, health_check};
pub use order::{
    add_order, add_product_to_order, clear_order, delete_order, delete_product_from_order,
    get_all_orders, get_all_products_in_order, get_order_by_id,
};
pub use product::{add_product, delete_product, get_all_products, get_product_by_id};

