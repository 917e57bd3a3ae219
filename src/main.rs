//! Showroom - backend for the 3D-model viewer
//!
//! Serves the static viewer assets and a hardcoded model catalog over one
//! HTTP listener.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use showroom_server::{router, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Showroom backend...");

    let config = ServerConfig::default();
    config
        .validate()
        .context("Startup validation failed; is the static directory in place?")?;

    info!(
        "Serving '{}' under /static, {} models in catalog",
        config.static_root.display(),
        showroom_catalog::models().len()
    );

    let app = router(&config);
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app)
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}
