//! Configuration management

use serde::{Deserialize, Serialize};
use std::{str::FromStr, time::Duration};

// ============================================================================
// Configuration Defaults
// ============================================================================

/// Default server host binding (all interfaces).
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 10000;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default MongoDB connection string for local development.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default database name.
pub const DEFAULT_MONGODB_DATABASE: &str = "zoo";

/// Default deadline for the start-up connection, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default deadline for each collection operation, in seconds.
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 30;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// MongoDB configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    pub connect_timeout_secs: u64,
    pub operation_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Deadline applied to every collection operation.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}

/// Request handling configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub body_decoding: BodyDecoding,
}

/// How request bodies that fail to decode are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyDecoding {
    /// Reject with a client error.
    #[default]
    Strict,
    /// Continue with an empty body, every field absent.
    Lenient,
}

impl FromStr for BodyDecoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(BodyDecoding::Strict),
            "lenient" => Ok(BodyDecoding::Lenient),
            other => Err(anyhow::anyhow!(
                "Invalid body decoding mode '{}': expected 'strict' or 'lenient'",
                other
            )),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let body_decoding = match std::env::var("ZOO_BODY_DECODING") {
            Ok(value) => value.parse()?,
            Err(_) => BodyDecoding::default(),
        };

        let config = Config {
            server: ServerConfig {
                host: std::env::var("ZOO_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: env_or("ZOO_PORT", DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: env_or("ZOO_SHUTDOWN_TIMEOUT", DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            },
            database: DatabaseConfig {
                uri: std::env::var("MONGODB_URI")
                    .unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string()),
                name: std::env::var("MONGODB_DATABASE")
                    .unwrap_or_else(|_| DEFAULT_MONGODB_DATABASE.to_string()),
                connect_timeout_secs: env_or("MONGODB_CONNECT_TIMEOUT", DEFAULT_CONNECT_TIMEOUT_SECS),
                operation_timeout_secs: env_or(
                    "MONGODB_OPERATION_TIMEOUT",
                    DEFAULT_OPERATION_TIMEOUT_SECS,
                ),
            },
            api: ApiConfig { body_decoding },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.database.uri.is_empty() {
            anyhow::bail!("MongoDB URI cannot be empty");
        }

        if self.database.name.is_empty() {
            anyhow::bail!("MongoDB database name cannot be empty");
        }

        if self.database.connect_timeout_secs == 0 || self.database.operation_timeout_secs == 0 {
            anyhow::bail!(
                "MongoDB timeouts must be greater than 0 (connect: {}s, operation: {}s)",
                self.database.connect_timeout_secs,
                self.database.operation_timeout_secs
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            database: DatabaseConfig {
                uri: DEFAULT_MONGODB_URI.to_string(),
                name: DEFAULT_MONGODB_DATABASE.to_string(),
                connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
                operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
            },
            api: ApiConfig::default(),
        }
    }
}
