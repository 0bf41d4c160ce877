//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::{Settings, StoreBackend};
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Run the server, or with `dry_run` only validate and summarize.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup errors (if not dry-run)
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            for line in self.validate_only()? {
                println!("{line}");
            }
            return Ok(());
        }

        Server::new(self.config).run().await
    }

    /// Validate configuration without starting the server.
    ///
    /// Returns the summary lines printed for a dry run.
    pub fn validate_only(&self) -> anyhow::Result<Vec<String>> {
        self.config.validate()?;

        let store = match self.config.store.backend {
            StoreBackend::Postgres => format!(
                "✓ Store backend: postgres (pool {}..{} connections)",
                self.config.store.min_connections, self.config.store.max_connections
            ),
            StoreBackend::Memory => "✓ Store backend: memory (data is not persisted)".to_string(),
        };

        Ok(vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Server would bind to: {}", self.config.server.address()),
            store,
            format!("✓ Logger level: {}", self.config.logger.level),
            "Dry run completed successfully - configuration is ready for deployment".to_string(),
        ])
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
