//! Server binary: reads config from env, opens the SQLite store, serves the advert API.

use advert_board::{app_router, connect_store, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(advert_board::config::DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = connect_store(&config).await?;
    tracing::info!(database_url = %config.database_url, "store ready");

    let app = app_router(AppState::new(store), &config);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
