//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output in full, compact or JSON format

pub mod config;
pub mod error;
mod writer;

pub use config::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
pub use error::LoggerError;

use std::io::IsTerminal;
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber for the given configuration.
///
/// # Errors
/// Fails on invalid configuration, an unopenable log file, or when a global
/// subscriber is already set.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LoggerError::config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    tracing_subscriber::registry()
        .with(build_layers(&config)?)
        .with(filter)
        .try_init()
        .map_err(|e| LoggerError::init(e.to_string()))
}

/// The file layer goes first so span fields are not formatted with the
/// console's ANSI codes (tokio-rs/tracing#1817).
fn build_layers(config: &LoggerConfig) -> Result<Vec<BoxedLayer>, LoggerError> {
    let mut layers = Vec::with_capacity(2);

    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }

    if config.console.enabled {
        let use_ansi = config.console.colored && std::io::stdout().is_terminal();
        layers.push(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true)
                .boxed(),
        );
    }

    Ok(layers)
}

fn file_layer(config: &FileConfig) -> Result<BoxedLayer, LoggerError> {
    let writer = Mutex::new(writer::open_log_file(config)?);
    let layer = fmt::layer().with_ansi(false).with_target(true);

    Ok(match config.format {
        LogFormat::Full => layer.with_writer(writer).boxed(),
        LogFormat::Compact => layer.compact().with_writer(writer).boxed(),
        LogFormat::Json => layer.json().with_writer(writer).boxed(),
    })
}
