//! # Portfolio Runtime
//!
//! Entry point for the portfolio backend.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load configuration (defaults, then environment overrides)
//! 3. Start the contact gateway
//! 4. Wait for Ctrl+C, then drain in-flight requests
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |---|---|
//! | `PORTFOLIO_HOST` | bind address |
//! | `PORTFOLIO_PORT` | bind port (falls back to `PORT`) |
//! | `PORTFOLIO_SIMULATED_DELAY_MS` | hand-off delay of the simulated sink |
//! | `PORTFOLIO_CORS_ORIGINS` | comma-separated allowed origins |

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use contact_gateway::{ContactGatewayService, GatewayConfig};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Load configuration from defaults and environment.
fn load_config() -> GatewayConfig {
    config_from_lookup(|key| std::env::var(key).ok())
}

fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GatewayConfig {
    let mut config = GatewayConfig::default();

    if let Some(host) = lookup("PORTFOLIO_HOST") {
        match host.parse() {
            Ok(h) => config.http.host = h,
            Err(_) => warn!(value = %host, "PORTFOLIO_HOST is not an IP address, ignoring"),
        }
    }

    if let Some(port) = lookup("PORTFOLIO_PORT").or_else(|| lookup("PORT")) {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!(value = %port, "Port is not a valid u16, ignoring"),
        }
    }

    if let Some(delay) = lookup("PORTFOLIO_SIMULATED_DELAY_MS") {
        match delay.parse() {
            Ok(ms) => config.processing.simulated_delay = Duration::from_millis(ms),
            Err(_) => warn!(value = %delay, "PORTFOLIO_SIMULATED_DELAY_MS is not a number, ignoring"),
        }
    }

    if let Some(origins) = lookup("PORTFOLIO_CORS_ORIGINS") {
        let origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if !origins.is_empty() {
            config.cors.allowed_origins = origins;
        }
    }

    config
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = load_config();
    info!(
        addr = %config.http_addr(),
        simulated_delay_ms = config.processing.simulated_delay.as_millis() as u64,
        "Loaded configuration"
    );

    let service = Arc::new(
        ContactGatewayService::with_simulated_sink(config)
            .context("Failed to create contact gateway")?,
    );

    let signal_target = Arc::clone(&service);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Ctrl+C received, shutting down"),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C, shutting down"),
        }
        signal_target.shutdown();
    });

    service.start().await.context("Contact gateway failed")?;

    Ok(())
}
