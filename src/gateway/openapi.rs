//! OpenAPI documentation
//!
//! Served at `/api-docs/openapi.json`; `export_openapi` writes the same document.
//! Successful bodies are wrapped in the `{code, msg, data}` envelope.

use utoipa::OpenApi;

use crate::catalog::{OrderDto, ProductDto};
use crate::gateway::handlers::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Catalog API",
        version = "1.0.0",
        description = "Orders, products, and the products listed in each order.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::get_all_orders,
        crate::gateway::handlers::order::get_order_by_id,
        crate::gateway::handlers::order::add_order,
        crate::gateway::handlers::order::delete_order,
        crate::gateway::handlers::order::add_product_to_order,
        crate::gateway::handlers::order::delete_product_from_order,
        crate::gateway::handlers::order::clear_order,
        crate::gateway::handlers::order::get_all_products_in_order,
        crate::gateway::handlers::product::get_all_products,
        crate::gateway::handlers::product::get_product_by_id,
        crate::gateway::handlers::product::add_product,
        crate::gateway::handlers::product::delete_product,
    ),
    components(schemas(HealthResponse, OrderDto, ProductDto)),
    tags(
        (name = "Orders", description = "Order lifecycle and product membership"),
        (name = "Products", description = "Product catalog"),
        (name = "System", description = "Health")
    )
)]
pub struct ApiDoc;
