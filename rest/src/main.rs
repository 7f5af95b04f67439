mod config;
mod error;
mod router;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context;
use notion_api::{Client, RestClient};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    notion: Arc<dyn Client>,
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Listening for ctrl-c: {err:#}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;
    let notion = RestClient::new(&config.notion_api_key).context("Creating Notion RestClient")?;

    if config.database_id().is_none() {
        tracing::warn!("NOTION_DATABASE_ID is not set, trade submissions will fail");
    }
    let addr = config.addr;
    let state = AppState {
        config: Arc::new(config),
        notion: Arc::new(notion),
    };

    let app = router::create_router(state)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Binding {addr}"))?;
    tracing::info!("Server running on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Serving http")?;
    return Ok(());
}
