// src/config/db.rs
// DOCUMENTATION: Persistence handle initialization
// PURPOSE: Build the shared document store from configuration

use crate::config::Config;
use crate::db::{DbHandle, PgDocumentStore};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Initialize the persistence handle
/// DOCUMENTATION: Called once during application startup in main.rs
/// Without DATABASE_URL the handle is empty and data endpoints report it.
/// The pool connects lazily, so an unreachable server surfaces on first use
/// (and in the /test diagnostics) rather than aborting startup.
pub fn init_db_handle(config: &Config) -> Result<DbHandle, sqlx::Error> {
    let Some(database_url) = config.database_url.as_deref() else {
        log::warn!("No DATABASE_URL set, starting without a database");
        return Ok(DbHandle::unconfigured());
    };

    let mut options = PgConnectOptions::from_str(database_url)?;
    if let Some(name) = &config.database_name {
        options = options.database(name);
    }

    let database_name = database_name(&options);

    log::info!("Initializing database pool for database: {}", database_name);

    let pool = PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy_with(options);

    let store = PgDocumentStore::new(pool, database_name);
    Ok(DbHandle::new(Arc::new(store)))
}

/// Database the options will connect to; PostgreSQL falls back to the user name
fn database_name(options: &PgConnectOptions) -> String {
    options
        .get_database()
        .unwrap_or_else(|| options.get_username())
        .to_string()
}
