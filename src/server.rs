//! HTTP server initialization and runtime setup.
//!
//! Builds the Cloudflare client and relay service, then runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::UniversalSslService;
use crate::config::Config;
use crate::domain::clients::ZoneSettingsClient;
use crate::domain::entities::UniversalSslSettings;
use crate::infrastructure::cloudflare::CloudflareClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the Cloudflare client cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client: Arc<dyn ZoneSettingsClient> =
        Arc::new(CloudflareClient::new(&config.cloudflare_api_base)?);

    let ssl_service = Arc::new(UniversalSslService::new(
        client,
        UniversalSslSettings::enable(config.certificate_authority.clone()),
    ));

    Ok(AppState::new(ssl_service, config.locale))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cloudflare API client
/// - Universal SSL relay service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The Cloudflare client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
