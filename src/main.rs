//! MoodSense API Server
//!
//! Run with: cargo run --bin moodsense
//!
//! # Configuration
//!
//! Config is read from `--config`, or the first of
//! `$CONFIG_DIR/moodsense/config.toml`, `/etc/moodsense/config.toml`,
//! `./config.toml`. Environment variables override file values:
//! - `MOODSENSE_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MOODSENSE_API_PORT`: Port to listen on (default: 5000)
//! - `MOODSENSE_CORS_ORIGINS`: Comma separated allowed origins (default: any)
//! - `MOODSENSE_ACTIVE_EMPLOYEE`: Employee id check-ins are recorded for (default: 1)
//! - `MOODSENSE_SEED`: Seed for the generated history (default: random)
//! - `MOODSENSE_LOG_LEVEL` / `MOODSENSE_LOG_FORMAT`: pretty or json logs
//! - `RUST_LOG`: Full tracing filter, wins over the configured level

use anyhow::Context;
use clap::Parser;
use moodsense::api::{serve, AppState};
use moodsense::config::{generate_default_config, Config, ConfigLoad, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "moodsense")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MoodSense check-in and HR dashboard API server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let loaded = match &args.config {
        Some(path) => ConfigLoad {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            source: Some(path.clone()),
            failures: Vec::new(),
        },
        None => Config::load_default(),
    };
    let config = loaded.config;

    init_tracing(&config.logging);

    tracing::info!("Starting MoodSense API server v{}", env!("CARGO_PKG_VERSION"));
    for failure in &loaded.failures {
        tracing::warn!("Skipping config file: {}", failure);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!(
        active_employee = config.roster.active_employee_id,
        tracked_departments = ?config.roster.tracked_departments,
        "Roster settings"
    );

    let state = AppState::from_config(config.clone());

    serve(state, &config.api).await?;

    tracing::info!("MoodSense API server stopped");
    Ok(())
}

/// Initialize tracing from the logging section, `RUST_LOG` taking priority
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("moodsense={},tower_http=debug", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
