//! Wire-facing transfer objects and their field-by-field mapping

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::models::{Order, Product};

/// Product as sent and received over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    /// Assigned by the store; ignored on create
    #[serde(default)]
    #[schema(example = 7)]
    pub id: Option<i64>,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 50.0)]
    pub cost: f64,
}

/// Order as sent and received over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    /// Assigned by the store; ignored on create
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "2023-07-09")]
    pub date: String,
    #[schema(example = 400.0)]
    pub cost: f64,
    #[serde(default)]
    pub products: Vec<ProductDto>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            cost: p.cost,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            cost: dto.cost,
        }
    }
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            date: o.date,
            cost: o.cost,
            products: o.products.into_iter().map(ProductDto::from).collect(),
        }
    }
}

impl From<OrderDto> for Order {
    fn from(dto: OrderDto) -> Self {
        Self {
            id: dto.id,
            date: dto.date,
            cost: dto.cost,
            products: dto.products.into_iter().map(Product::from).collect(),
        }
    }
}
