//! Order handlers (CRUD + product membership)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, created, ok};
use crate::catalog::{OrderDto, ProductDto};

/// List orders
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = [OrderDto]),
        (status = 500, description = "Store failure")
    ),
    tag = "Orders"
)]
pub async fn get_all_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<OrderDto>> {
    ok(state.orders.get_all().await?)
}

/// Get order by id
///
/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderDto),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<OrderDto> {
    match state.orders.get_by_id(id).await? {
        Some(order) => ok(order),
        None => Err(ApiError::order_not_found(id)),
    }
}

/// Create order
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 500, description = "Store failure")
    ),
    tag = "Orders"
)]
pub async fn add_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OrderDto>,
) -> ApiResult<OrderDto> {
    created(state.orders.create(req).await?)
}

/// Delete order (its products are kept)
///
/// DELETE /orders/{order_id}
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.orders.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::order_not_found(id))
    }
}

/// Add a new product to an order
///
/// POST /orders/{order_id}/products
#[utoipa::path(
    post,
    path = "/orders/{order_id}/products",
    params(("order_id" = i64, Path, description = "Order id")),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Updated order", body = OrderDto),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn add_product_to_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
    Json(req): Json<ProductDto>,
) -> ApiResult<OrderDto> {
    match state.orders.add_product(order_id, req).await? {
        Some(order) => ok(order),
        None => Err(ApiError::order_not_found(order_id)),
    }
}

/// Remove a product from an order
///
/// DELETE /orders/{order_id}/products/{product_id}
#[utoipa::path(
    delete,
    path = "/orders/{order_id}/products/{product_id}",
    params(
        ("order_id" = i64, Path, description = "Order id"),
        ("product_id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Updated order", body = OrderDto),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn delete_product_from_order(
    State(state): State<Arc<AppState>>,
    Path((order_id, product_id)): Path<(i64, i64)>,
) -> ApiResult<OrderDto> {
    match state.orders.remove_product(order_id, product_id).await? {
        Some(order) => ok(order),
        None => Err(ApiError::order_not_found(order_id)),
    }
}

/// Remove every product from an order
///
/// DELETE /orders/{order_id}/products
#[utoipa::path(
    delete,
    path = "/orders/{order_id}/products",
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Cleared order", body = OrderDto),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn clear_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> ApiResult<OrderDto> {
    match state.orders.clear(order_id).await? {
        Some(order) => ok(order),
        None => Err(ApiError::order_not_found(order_id)),
    }
}

/// List the products of an order
///
/// GET /orders/{order_id}/products
#[utoipa::path(
    get,
    path = "/orders/{order_id}/products",
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Products in list order", body = [ProductDto]),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_all_products_in_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> ApiResult<Vec<ProductDto>> {
    match state.orders.list_products(order_id).await? {
        Some(products) => ok(products),
        None => Err(ApiError::order_not_found(order_id)),
    }
}
