//! Test helpers for integration tests
//!
//! Utilities for spawning test servers and checking responses.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use volunteer_api::{create_app, create_app_state, serve};
use volunteer_common::{AppConfig, DatabaseConfig, StorageBackend};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}

/// In-memory configuration with a rate limit no test will reach
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::in_memory(0, "integration-test-secret");
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;
    config
}

/// Postgres-backed configuration when `DATABASE_URL` is set
pub fn postgres_config() -> Option<AppConfig> {
    dotenvy::dotenv().ok();

    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return None;
    };

    let mut config = test_config();
    config.storage.backend = StorageBackend::Postgres;
    config.database = Some(DatabaseConfig {
        url,
        max_connections: 5,
        min_connections: 1,
        migrations_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../crates/volunteer-db/migrations")
            .to_string(),
    });
    Some(config)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response and return its `error` object
pub async fn assert_error(
    response: Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Result<serde_json::Value> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    let error = body["error"].clone();
    anyhow::ensure!(
        error["code"] == expected_code,
        "Expected error code {}, got {}",
        expected_code,
        error
    );
    Ok(error)
}
