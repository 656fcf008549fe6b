//! SWASH Admin Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Read from `--config`, `~/.config/swash-admin/config.toml` or
//! `./config.toml`, then overridden by environment variables:
//! - `PORT`: Port to listen on (default: 3000)
//! - `SWASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SWASH_STATIC_DIR`: Static asset directory (default: public)
//! - `SWASH_PORTAL_USER`: Name shown in the page header
//! - `SWASH_LOG_LEVEL`, `SWASH_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full tracing filter, takes precedence over `SWASH_LOG_LEVEL`

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swash_admin::config::{generate_default_config, Config, LoadReport, LoggingConfig};
use swash_admin::web::{page_paths, serve, AppState, API_PATHS, HEALTH_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swash-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SWASH internal admin dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server (default)
    Serve {
        /// Path to a config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a default config file
    InitConfig,

    /// List every page and API route
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Commands::Serve { config, host, port } => run_server(config, host, port).await,
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Commands::Routes => {
            for path in page_paths() {
                println!("GET {:<28} page", path);
            }
            for path in API_PATHS {
                println!("GET {:<28} json", path);
            }
            println!("GET {:<28} json", HEALTH_PATH);
            Ok(())
        }
    }
}

async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let (mut config, report) = match &config_path {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, LoadReport::explicit(path))
        }
        None => Config::load_default(),
    };

    // Command-line flags win over file and environment
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    init_tracing(&config.logging);
    report.log();

    tracing::info!("Starting SWASH Admin Dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static assets: {:?}", config.server.static_dir);

    let state = AppState::with_fixtures(config);
    tracing::info!("Data provider: {}", state.data.name());

    serve(state).await.context("server failed")?;

    tracing::info!("SWASH Admin Dashboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("swash_admin={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
