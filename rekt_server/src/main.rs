mod config;
mod docs;
mod error;
mod info;
mod router;
mod state;
mod valuation;

use anyhow::Context;
use dotenvy::dotenv;
use router::router;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, state::ServerState};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let state = ServerState::from_config(&config)?;

    let app = router(state, &config.cors_allow);

    let listener = tokio::net::TcpListener::bind(&config.server_domain)
        .await
        .with_context(|| format!("failed to bind {}", config.server_domain))?;

    log::info!("Rekt server listening on {}", config.server_domain);

    axum::serve(listener, app).await?;

    Ok(())
}
