//! Configuration validation logic
//!
//! Each section validates itself; [`Settings::validate`] returns the first
//! failure.

use crate::config::error::ConfigError;
use crate::config::settings::{
    FileSettings, LoggerSettings, ServerConfig, Settings, StoreBackend, StoreConfig,
};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

const VALID_URL_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

impl ServerConfig {
    /// Host must be non-blank and port non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host is required. Use 127.0.0.1 for local access or 0.0.0.0 for all interfaces.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl StoreConfig {
    /// # Validation Rules
    /// - The postgres backend needs a `postgres://` or `postgresql://` URL
    /// - Max and min connections must be greater than 0, with min <= max
    /// - Connection timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StoreBackend::Postgres {
            if self.url.trim().is_empty() {
                return Err(ConfigError::validation(
                    "store.url",
                    "Store URL is required for the postgres backend. Set store.url or REELHUB_STORE__URL.",
                ));
            }

            if !VALID_URL_SCHEMES
                .iter()
                .any(|scheme| self.url.starts_with(scheme))
            {
                return Err(ConfigError::validation(
                    "store.url",
                    "Invalid store URL format. Expected format: postgres://[user:password@]host[:port]/database",
                ));
            }
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "store.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "store.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "store.min_connections",
                format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "store.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.store.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
