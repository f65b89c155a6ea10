//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Bind the listener
//! - Wire OS signals to graceful shutdown
//! - Run the server until it stops
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::SiteConfig;
use crate::http::SiteServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter on {address}: {source}")]
    Metrics {
        address: SocketAddr,
        #[source]
        source: metrics_exporter_prometheus::BuildError,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the site with an already validated configuration and serve until a
/// shutdown signal arrives.
pub async fn run(config: SiteConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let address = config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(address).map_err(|source| StartupError::Metrics { address, source })?;
    }

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    SiteServer::new(config).run(listener, signal).await?;
    Ok(())
}
