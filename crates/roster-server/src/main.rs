//! Roster API server binary.

use clap::Parser;
use roster_core::Staffing;
use roster_server::{create_router, demo, AppState, Args, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,roster_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line args
    let args = Args::parse();
    let config = ServerConfig::from(&args);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.listen_addr,
        data_path = %config.data_path.display(),
        "starting roster server"
    );

    // Open the store
    let staffing = Staffing::open(config.store_config())?;
    if staffing.store().was_recovered() {
        info!("store recovered from previous run");
    }

    if config.seed_demo {
        demo::seed_demo(&staffing)?;
    }

    // Create application state and router
    let state = AppState::new(staffing);
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Resolve when the process receives ctrl+c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
        return;
    }
    info!("received shutdown signal");
}
