// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    /// When absent the service runs without a persistence handle
    pub database_url: Option<String>,

    /// Database to use on the server named by database_url
    /// Overrides the database path component of the URL when set
    pub database_name: Option<String>,

    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            database_url: non_empty_var("DATABASE_URL"),

            database_name: non_empty_var("DATABASE_NAME"),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),

            db_connection_timeout: env::var("DB_CONNECTION_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Missing database settings are not fatal; data endpoints report them
    pub fn validate(&self) -> Result<(), String> {
        if self.server_port == 0 {
            return Err("PORT must be a non-zero port number".to_string());
        }

        if self.database_url.is_none() {
            log::warn!("DATABASE_URL not configured - data endpoints will return errors");
        }

        if self.database_name.is_none() {
            log::warn!("DATABASE_NAME not configured - using database from DATABASE_URL");
        }

        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
