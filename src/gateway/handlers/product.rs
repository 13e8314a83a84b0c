//! Product handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, created, ok};
use crate::catalog::ProductDto;

/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [ProductDto]),
        (status = 500, description = "Store failure")
    ),
    tag = "Products"
)]
pub async fn get_all_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<ProductDto>> {
    ok(state.products.get_all().await?)
}

/// GET /products/{product_id}
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<ProductDto> {
    match state.products.get_by_id(id).await? {
        Some(product) => ok(product),
        None => Err(ApiError::product_not_found(id)),
    }
}

/// POST /products
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto)
    ),
    tag = "Products"
)]
pub async fn add_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProductDto>,
) -> ApiResult<ProductDto> {
    created(state.products.create(req).await?)
}

/// DELETE /products/{product_id}
///
/// Also removes the product from every order that lists it.
#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.products.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::product_not_found(id))
    }
}
