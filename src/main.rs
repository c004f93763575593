use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cineverse_api::api::{create_router, AppState};
use cineverse_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cineverse_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // The dataset is fixed at build time; state is built once and shared
    let state = AppState::seeded();
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
