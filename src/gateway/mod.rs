pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    routing::{delete, get},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;

use state::AppState;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Build the complete router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // System
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Orders
        .route(
            "/orders",
            get(handlers::get_all_orders).post(handlers::add_order),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::get_order_by_id).delete(handlers::delete_order),
        )
        // Order membership
        .route(
            "/orders/{order_id}/products",
            get(handlers::get_all_products_in_order)
                .post(handlers::add_product_to_order)
                .delete(handlers::clear_order),
        )
        .route(
            "/orders/{order_id}/products/{product_id}",
            delete(handlers::delete_product_from_order),
        )
        // Products
        .route(
            "/products",
            get(handlers::get_all_products).post(handlers::add_product),
        )
        .route(
            "/products/{product_id}",
            get(handlers::get_product_by_id).delete(handlers::delete_product),
        )
        .with_state(state)
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let store = state.store_kind();
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port in use?)", addr))?;

    tracing::info!(addr = %addr, store, "Gateway listening");
    tracing::info!("OpenAPI document: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
