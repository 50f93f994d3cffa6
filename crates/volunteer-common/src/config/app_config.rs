//! Server configuration, read from the process environment
//!
//! A `.env` file in the working directory is loaded first when present.
//! `API_PORT` and `JWT_SECRET` are always required; `DATABASE_URL` only
//! when the postgres backend is selected.

use std::env;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    /// Present whenever `DATABASE_URL` is set, even on the memory backend
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// Listener address for the HTTP API
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which repository implementation backs the services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue("STORAGE_BACKEND", other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Directory of `.sql` migrations applied at startup
    pub migrations_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    pub access_token_expiry: i64,
}

/// Token bucket shared by every API route
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Empty outside production means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

const DEFAULT_APP_NAME: &str = "volunteer-hub";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_MIGRATIONS_DIR: &str = "./crates/volunteer-db/migrations";
const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 3600;

fn var_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Parsed value of `key`, `fallback` when unset or unparsable
fn parse_or<T: FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

impl DatabaseConfig {
    fn from_env(url: String) -> Self {
        Self {
            url,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 20),
            min_connections: parse_or("DATABASE_MIN_CONNECTIONS", 5),
            migrations_dir: var_or("DATABASE_MIGRATIONS_DIR", DEFAULT_MIGRATIONS_DIR),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst: 50,
        }
    }
}

impl RateLimitConfig {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            requests_per_second: parse_or(
                "RATE_LIMIT_REQUESTS_PER_SECOND",
                defaults.requests_per_second,
            ),
            burst: parse_or("RATE_LIMIT_BURST", defaults.burst),
        }
    }
}

impl CorsConfig {
    fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        Self { allowed_origins }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// # Errors
    /// A required variable is missing, or `STORAGE_BACKEND` / `APP_ENV`
    /// holds an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let backend: StorageBackend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };
        let env_kind: Environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        let database = env::var("DATABASE_URL").ok().map(DatabaseConfig::from_env);
        if backend == StorageBackend::Postgres && database.is_none() {
            return Err(ConfigError::MissingVar("DATABASE_URL"));
        }

        let port: u16 = env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .ok_or(ConfigError::MissingVar("API_PORT"))?;
        let secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        Ok(Self {
            app: AppSettings {
                name: var_or("APP_NAME", DEFAULT_APP_NAME),
                env: env_kind,
            },
            api: ServerConfig {
                host: var_or("API_HOST", DEFAULT_HOST),
                port,
            },
            storage: StorageConfig { backend },
            database,
            jwt: JwtConfig {
                secret,
                access_token_expiry: parse_or(
                    "JWT_ACCESS_TOKEN_EXPIRY",
                    DEFAULT_TOKEN_EXPIRY_SECS,
                ),
            },
            rate_limit: RateLimitConfig::from_env(),
            cors: CorsConfig::from_env(),
        })
    }

    /// Memory-backed configuration for tests and local demos
    pub fn in_memory(port: u16, jwt_secret: &str) -> Self {
        Self {
            app: AppSettings {
                name: DEFAULT_APP_NAME.to_string(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
            },
            database: None,
            jwt: JwtConfig {
                secret: jwt_secret.to_string(),
                access_token_expiry: DEFAULT_TOKEN_EXPIRY_SECS,
            },
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig {
                allowed_origins: Vec::new(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert!(matches!(
            "qa".parse::<Environment>(),
            Err(ConfigError::InvalidValue("APP_ENV", _))
        ));
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(
            "Postgres".parse::<StorageBackend>().unwrap(),
            StorageBackend::Postgres
        );
        assert_eq!(
            "in-memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert!(matches!(
            "mongodb".parse::<StorageBackend>(),
            Err(ConfigError::InvalidValue("STORAGE_BACKEND", _))
        ));
    }

    #[test]
    fn test_in_memory_config() {
        let config = AppConfig::in_memory(0, "secret");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.database.is_none());
        assert_eq!(config.api.address(), "127.0.0.1:0");
        assert_eq!(config.jwt.access_token_expiry, 3600);
        assert_eq!(config.rate_limit.burst, 50);
    }
}
