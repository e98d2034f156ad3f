//! Clash configuration relay.
//!
//! Fetches a remote Clash YAML configuration, injects the `SG_AZURE` proxy
//! and its routing rules, and returns the patched document.
//!
//! ```text
//!   client                      clash-relay                        upstream
//!     │  GET /xxxxxxxx/clash?url=U  │                                  │
//!     │────────────────────────────▶│  GET U (User-Agent: clash)       │
//!     │                             │─────────────────────────────────▶│
//!     │                             │◀─────────────────────────────────│
//!     │                             │  decode → merge → encode         │
//!     │◀────────────────────────────│                                  │
//!     │  200 application/x-yaml     │                                  │
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use clash_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use clash_relay::http::{RelayServer, RELAY_PATH};
use clash_relay::lifecycle::{wait_for_signal, Shutdown};
use clash_relay::observability::{logging, metrics};

#[derive(Parser, Debug)]
#[command(name = "clash-relay")]
#[command(about = "Relay a Clash configuration with an injected proxy and rules", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener address, overriding the configuration file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability);

    tracing::info!("clash-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %e,
                "Failed to bind listener"
            );
            return Err(e.into());
        }
    };
    tracing::info!(
        address = %listener.local_addr()?,
        path = RELAY_PATH,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        // Validation guarantees the address parses.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            wait_for_signal().await;
            shutdown.trigger();
        }
    });

    let server = RelayServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
