//! TechCorp site server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request ID / trace / timeout
//!                          │
//!                          ▼
//!                   ┌──────────────┐  file found
//!                   │ static files │──────────────▶ asset
//!                   └──────┬───────┘
//!                          ▼
//!                   ┌──────────────┐  closed
//!                   │ access gate  │──────────────▶ closed notice (200)
//!                   └──────┬───────┘
//!                          ▼ open
//!                   ┌──────────────┐
//!                   │   routing    │ → pages (layout + fragment) → 200 / 404
//!                   └──────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use techcorp_site::access::ZoneSetting;
use techcorp_site::config::{resolve_config, ConfigOverrides};
use techcorp_site::lifecycle::startup;
use techcorp_site::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "techcorp-site")]
#[command(about = "TechCorp website, open Monday-Friday 9 AM - 5 PM", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address (e.g. 127.0.0.1:3000)
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the zone business hours are read in ("local", "utc", "+02:00")
    #[arg(short, long)]
    timezone: Option<ZoneSetting>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref(), &overrides(&cli)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.observability.log_format);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        timezone = %config.schedule.timezone,
        static_dir = %config.static_files.dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

fn overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        bind_address: cli.bind.clone(),
        timezone: cli.timezone,
    }
}
