//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::Settings;
use crate::state::AppState;
use crate::store;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Opens the store session
    /// 3. Creates application state and router
    /// 4. Binds to configured address
    /// 5. Serves with graceful shutdown
    ///
    /// # Errors
    /// - Store connection failures (an unreachable database aborts startup)
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %self.settings.application.environment,
            "Application starting"
        );

        // Store URL is left out; it may carry credentials
        tracing::info!(
            backend = self.settings.store.backend.as_str(),
            max_connections = self.settings.store.max_connections,
            min_connections = self.settings.store.min_connections,
            connection_timeout = self.settings.store.connection_timeout,
            "Store configuration loaded"
        );

        tracing::info!(
            level = %self.settings.logger.level,
            console_enabled = self.settings.logger.console.enabled,
            file_enabled = self.settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        let store = store::connect(&self.settings.store).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to open store session");
            anyhow::anyhow!("Failed to open store session: {}", e)
        })?;
        tracing::info!("Store session established");

        let router = create_router(AppState::new(store));

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for Ctrl+C or SIGTERM.
///
/// A signal handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
