use std::error::Error;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::ActivityStore;
use activities::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "config_invalid");
        e
    })?;

    let store = ActivityStore::seeded();
    let app = web::router(store, &config.static_dir);

    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind_failed: trying fallback port");
            tokio::net::TcpListener::bind(fallback).await.map_err(|e| {
                error!(%fallback, error = %e, "bind_failed");
                e
            })?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}/static/index.html to sign up", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
