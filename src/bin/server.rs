//! Timetable HTTP Server Binary
//!
//! This is the main entry point for the timetable REST API server.
//! It initializes the repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin timetable-server --features "local-repo,http-server"
//! ```
//!
//! # Configuration
//!
//! Settings are read from `timetable.toml` (current directory, `config/`,
//! or the parent directory); built-in defaults apply when no file exists.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides the config file)
//! - `PORT`: Server port (overrides the config file)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use timetable_rust::config::{AppConfig, ConfigError};
use timetable_rust::http::{create_router, AppState};
use timetable_rust::store::LocalRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Timetable HTTP Server");

    let config = match AppConfig::from_default_location() {
        Ok(config) => config,
        Err(ConfigError::NotFound) => {
            info!("No timetable.toml found, using defaults");
            AppConfig::default()
        }
        Err(e) => {
            warn!("Ignoring unreadable config: {}", e);
            AppConfig::default()
        }
    };
    let week_start = config.week_start()?;

    let repository = Arc::new(LocalRepository::new());
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository).with_week_start(week_start);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address; environment overrides the config file
    let server = config.server.with_env_overrides();
    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
