//! Catalog Services Layer
//!
//! Business logic over the repositories. Handlers stay thin HTTP adapters
//! that delegate here.

pub mod order;
pub mod product;

pub use order::OrderService;
pub use product::ProductService;
