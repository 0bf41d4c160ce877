//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override file and environment values.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

/// Applies CLI overrides on top of a loaded base configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration as selected by `--config` and `--env`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Command-level flags win over global flags, which win over the base.
    /// The merged result is validated again.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(command) = &cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host) = host {
                    config.server.host = host.clone();
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(level) = log_level {
                    config.logger.level = level.as_str().to_string();
                }
            }
        }
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use clap::Parser;

    fn create_valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.store.backend = StoreBackend::Memory;
        config
    }

    fn merge(args: &[&str]) -> Result<Settings, ConfigError> {
        let cli = Cli::try_parse_from(args).unwrap();
        ConfigurationMerger::new(create_valid_base_config()).merge_cli_args(&cli)
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        assert_eq!(merge(&["reelhub"]).unwrap(), create_valid_base_config());
    }

    #[test]
    fn test_global_log_flags() {
        assert_eq!(merge(&["reelhub", "--verbose"]).unwrap().logger.level, "debug");
        assert_eq!(merge(&["reelhub", "--quiet"]).unwrap().logger.level, "error");
    }

    #[test]
    fn test_serve_overrides() {
        let merged = merge(&["reelhub", "serve", "--host", "0.0.0.0", "--port", "9000"]).unwrap();
        assert_eq!(merged.server.address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&["reelhub", "--verbose", "serve", "--log-level", "warn"]).unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_merged_config_is_validated() {
        let cli = Cli::try_parse_from(["reelhub"]).unwrap();
        let merger = ConfigurationMerger::new(Settings::default());
        assert!(matches!(
            merger.merge_cli_args(&cli),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
