//! # Product API
//!
//! Binary entry point: load configuration, start the product actor, serve HTTP until
//! Ctrl+C or SIGTERM, then stop the actor.
//!
//! ```bash
//! PRODUCT_API_PORT=8000 RUST_LOG=info product_api
//! ```

use actor_framework::tracing::setup_tracing;
use product_api::api::{self, SERVICE_TITLE, SERVICE_VERSION};
use product_api::config::ServiceConfig;
use product_api::lifecycle::ProductSystem;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServiceConfig::from_env()?;
    info!(title = SERVICE_TITLE, version = SERVICE_VERSION, "Starting service");

    let system = ProductSystem::new(config.channel_capacity)?;
    let app = api::router(system.product_client.clone());

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and its client clone) is gone once serve returns
    system.shutdown().await?;

    info!("Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
