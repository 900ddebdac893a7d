//! Mergefeed CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use mergefeed::{FeedError, MergefeedConfig, OperationMode};
use ortho_config::OrthoConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let mut stderr = io::stderr().lock();
            if writeln!(stderr, "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            if cli::output::write_status(&mut stderr, 1).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FeedError> {
    let config = load_config()?;
    init_tracing(&config);
    config.validate()?;

    match config.operation_mode() {
        OperationMode::Generate => cli::generate::run(&config).await,
        OperationMode::Show => cli::show::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MergefeedConfig, FeedError> {
    MergefeedConfig::load().map_err(|error| FeedError::Configuration {
        message: error.to_string(),
    })
}

/// Logs to stderr; `RUST_LOG` overrides the configured verbosity.
fn init_tracing(config: &MergefeedConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}
