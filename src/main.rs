// Main entry point - Dependency injection and server setup
use std::net::SocketAddr;

use cfo_insight::infrastructure::config::load_app_config;
use cfo_insight::presentation::router::api_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration and wire services
    let config = load_app_config()?;
    let state = cfo_insight::build_state(&config)?;

    // Build router (presentation layer)
    let router = api_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting cfo-insight service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
