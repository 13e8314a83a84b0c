//! Order/product catalog
//!
//! - [`models`] - stored entities and product list edits
//! - [`dto`] - transfer objects and mapping
//! - [`repository`] - persistence gateway (PostgreSQL and in-memory)
//! - [`service`] - order and product aggregate services

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use dto::{OrderDto, ProductDto};
pub use error::{StoreError, StoreResult};
pub use models::{Order, Product, ProductEdit};
pub use service::{OrderService, ProductService};
