//! HTTP server initialization and runtime setup.
//!
//! Builds the shared HTTP client, storage and services, then runs Axum until
//! Ctrl-C or SIGTERM.

use crate::config::Config;
use crate::infrastructure::http::{HttpImageFetcher, ResendEmailSender, build_client};
use crate::infrastructure::persistence::FsLogoRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared `reqwest` client with the upstream timeout
/// - Logos directory under the public assets root
/// - Logo proxy, logo persister and contact relay services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The logos directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = build_client(Duration::from_secs(config.upstream_timeout_secs))
        .context("Failed to build HTTP client")?;

    let logos_dir = config.logos_dir();
    let logo_repository = FsLogoRepository::new(&logos_dir);
    logo_repository
        .ensure_dir()
        .await
        .context("Failed to create logos directory")?;
    tracing::info!("Logos directory ready at {}", logos_dir.display());

    let state = AppState::new(
        Arc::new(HttpImageFetcher::new(client.clone())),
        Arc::new(logo_repository),
        Arc::new(ResendEmailSender::new(client, &config.contact)),
        &config.contact,
    );

    let app = app_router(state, &logos_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
