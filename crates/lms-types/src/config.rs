//! configuration types for the lms server.

use serde::{Deserialize, Serialize};

/// main configuration for the lms server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// address to bind the http server to.
    pub listen_addr: String,

    /// database configuration.
    pub database: DatabaseConfig,

    /// origin allowed to make cross-origin requests (the web frontend).
    pub cors_allowed_origin: String,

    /// log level: trace, debug, info, warn or error.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8082".to_string(),
            database: DatabaseConfig::default(),
            cors_allowed_origin: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// database type: "sqlite" or "postgres".
    pub db_type: String,

    /// database connection string or file path.
    pub connection_string: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: "sqlite".to_string(),
            connection_string: "lms.sqlite".to_string(),
        }
    }
}
