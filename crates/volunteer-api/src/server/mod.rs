//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use volunteer_common::{AppConfig, AppError, JwtService, StorageBackend};
use volunteer_db::{create_pool, run_migrations, MemoryStore, PoolSettings};
use volunteer_service::ServiceContext;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
///
/// Health routes skip rate limiting so probes keep working under load.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(health.merge(api).with_state(state))
}

/// Initialize the configured storage backend and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

    let service_context = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            ServiceContext::in_memory(MemoryStore::new(), jwt_service)
        }
        StorageBackend::Postgres => {
            let database = config.database.as_ref().ok_or_else(|| {
                AppError::Config("DATABASE_URL is required for postgres storage".to_string())
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolSettings::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            run_migrations(&pool, &database.migrations_dir)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

            ServiceContext::postgres(pool, jwt_service)
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Serve an application on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))
}

/// Bind and run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);
    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {}", e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
