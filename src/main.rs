use crate::config::PizzaConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::PizzaRepository;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

pub mod config;
mod database;
mod domain;
mod errors;
mod features;
mod openapi;
mod router;
mod telemetry;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub pizzas: Arc<dyn PizzaRepository>,
}

impl AppState {
    pub fn new(pizzas: Arc<dyn PizzaRepository>) -> Self {
        Self { pizzas }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    telemetry::init_logging();

    let config = PizzaConfig::from_env();

    // open (or create) the store and make sure the pizzas table exists
    let repo = SqliteRepository::connect(&config).await?;
    let pool = repo.pool().clone();
    let state = AppState::new(Arc::new(repo));

    let app = router::build_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "pizza store listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("pizza store stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
