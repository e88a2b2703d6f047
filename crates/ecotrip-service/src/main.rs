//! ecotrip HTTP microservice entry point.
//!
//! # Configuration
//!
//! - `ECOTRIP_ROUTES` / `ECOTRIP_FACTORS` / `ECOTRIP_CREDITS` - JSON files
//!   overriding the built-in catalog, factor table, and credit configuration
//! - `ECOTRIP_RESPONSE_DELAY_MS` - artificial response delay (default: off)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ecotrip_service::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = AppState::from_env().map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    info!(
        routes = state.catalog().len(),
        modes = state.factors().len(),
        delay_ms = state.response_delay().as_millis() as u64,
        "application state loaded"
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
