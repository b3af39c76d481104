//! MindWell API server
//!
//! ```sh
//! # Run with default config (~/.config/mindwell/config.toml)
//! mindwell-service
//!
//! # Custom config path
//! mindwell-service --config /etc/mindwell/config.toml
//!
//! # Override the port
//! mindwell-service --port 8080
//!
//! # Validate config without starting
//! mindwell-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use mindwell::config::{AppConfig, ConfigError};
use mindwell::server::{init_tracing, ServerHandle, ServerOptions};

/// MindWell API: user signup and profiles for the MindWell platform.
#[derive(Parser, Debug)]
#[command(
    name = "mindwell-service",
    version,
    about = "MindWell REST API server",
    long_about = "MindWell REST API server: user signup with location checks, \
                  profile lookup and JWT cookie sessions.\n\n\
                  Default config: ~/.config/mindwell/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MINDWELL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

/// Apply command-line overrides on top of the loaded configuration and
/// re-check the result.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) -> Result<(), ConfigError> {
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    config.validate()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(mindwell::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Err(e) = apply_overrides(&mut config, &cli) {
        if cli.check {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        return Err(e.into());
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Environment : {:?}", config.environment);
        println!("   Address     : {}", config.listen_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
