//! Volunteer API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p volunteer-api
//! ```
//!
//! Configuration is read from environment variables, optionally via `.env`.

use tracing::{error, info};
use volunteer_common::{try_init_tracing_with_config, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    let tracing_config = match &config {
        Ok(config) => TracingConfig::for_environment(config.app.env),
        Err(_) => TracingConfig::default(),
    };
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        storage = ?config.storage.backend,
        "Starting Volunteer API Server"
    );

    if let Err(e) = volunteer_api::run(config).await {
        error!(error = %e, "Server stopped with an error");
        std::process::exit(1);
    }
}
