//! Order Catalog - orders, products, and the many-to-many link between them
//!
//! # Modules
//!
//! - [`catalog`] - entities, transfer objects, repositories, and services
//! - [`gateway`] - axum HTTP surface and OpenAPI document
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use catalog::{
    Order, OrderDto, OrderService, Product, ProductDto, ProductEdit, ProductService, StoreError,
};
pub use config::AppConfig;
pub use gateway::state::AppState;
