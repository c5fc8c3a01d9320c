//! Hospital ERP: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/hospital-erp/config.toml)
//! hospital-erp
//!
//! # Custom config path and port
//! hospital-erp --config /etc/hospital-erp/config.toml --port 9090
//!
//! # Validate config without starting
//! hospital-erp --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use hospital_erp::config::AppConfig;
use hospital_erp::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "hospital-erp",
    version,
    about = "Hospital ERP session and navigation API",
    long_about = "REST API for the hospital ERP demo: sign-in against the staff \
                  directory, role-based navigation and read-only clinic screens.\n\n\
                  Default config: ~/.config/hospital-erp/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "HOSPITAL_ERP_CONFIG")]
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
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(hospital_erp::default_config_path);

    // Tracing needs the final level, so errors are reported after init.
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);
    let load_failed = load_error.is_some();
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    if cli.check {
        if load_failed {
            return Err(format!("Invalid configuration: {}", config_path.display()).into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.address());
        println!("   Session     : {:?}", config.session.storage);
        println!("   Session dir : {}", config.session.dir().display());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let handle = ServerHandle::start(ServerOptions { config }).await?;
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
