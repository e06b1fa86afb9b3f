//! `axonops-logger` command line.
//!
//! Provisions a named console logger and writes one message through it.
//!
//! ```text
//! $ axonops-logger --at warning --function check_disk disk usage high
//! 2024-05-01 09:30:12,345 - AxonOpsLogger - WARNING - check_disk - disk usage high
//! ```
//!
//! Diagnostics from the library itself go to stderr and follow `RUST_LOG`.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axonops_logger::config::load_config;
use axonops_logger::{LoggerConfig, LoggerRegistry, LoggerResult, SeverityLevel, DEFAULT_LOGGER_NAME};

#[derive(Parser)]
#[command(name = "axonops-logger")]
#[command(about = "Provision a named console logger and emit a message", long_about = None)]
struct Cli {
    /// Logger name (registry key)
    #[arg(short, long, default_value = DEFAULT_LOGGER_NAME)]
    name: String,

    /// Minimum severity the logger emits [default: $AXONOPS_LOG_LEVEL or info]
    #[arg(short, long)]
    level: Option<SeverityLevel>,

    /// TOML file with `name` and `level`; overrides --name and --level
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Severity of the emitted message
    #[arg(short, long, default_value = "info")]
    at: SeverityLevel,

    /// Function name shown in the output line
    #[arg(short, long, default_value = "main")]
    function: String,

    /// Message text
    #[arg(required = true)]
    message: Vec<String>,
}

fn main() -> LoggerResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => resolve_config(&cli),
    };

    tracing::debug!(name = %config.name, level = %config.level, "Provisioning logger");

    let logger = config.provision(LoggerRegistry::global());
    logger.log(cli.at, &cli.function, format_args!("{}", cli.message.join(" ")));

    Ok(())
}

/// Level precedence without a config file: `--level`, then the environment,
/// then the default.
fn resolve_config(cli: &Cli) -> LoggerConfig {
    let config = LoggerConfig {
        name: cli.name.clone(),
        ..LoggerConfig::default()
    };
    match cli.level {
        Some(level) => LoggerConfig { level, ..config },
        None => config.with_env_overrides(),
    }
}
