//! Order Catalog service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ Services │───▶│ Repository │
//! │  (YAML)  │    │  (axum)  │    │          │    │ (PG / mem) │
//! └──────────┘    └──────────┘    └──────────┘    └────────────┘
//! ```
//!
//! Usage: `order_catalog [--env dev] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;

use order_catalog::catalog::repository::MemoryStore;
use order_catalog::config::AppConfig;
use order_catalog::db::{Database, schema};
use order_catalog::gateway::{self, state::AppState};
use order_catalog::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&app_config);

    tracing::info!("Starting Order Catalog in {} mode", env);

    let state = match &app_config.postgres {
        Some(pg) => {
            let db = Database::connect(pg)
                .await
                .context("Failed to connect to PostgreSQL")?;
            schema::init_schema(db.pool()).await?;
            AppState::with_postgres(Arc::new(db))
        }
        None => {
            tracing::warn!("No postgres configured, using in-memory store (data is lost on exit)");
            AppState::with_memory(MemoryStore::new())
        }
    };

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    gateway::run_server(&app_config.gateway.host, port, Arc::new(state)).await
}
