//! Dispatch console server binary.

use std::net::SocketAddr;

use dispatch_server::{config::Config, create_app, create_state, create_store, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        seed_mock_data = config.seed_mock_data,
        require_session = config.require_session,
        "Starting dispatch console server"
    );

    let store = create_store(&config);
    let state = create_state(config.clone(), store);
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
