// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database handle, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        anyhow::bail!("Configuration error: {}", e);
    }

    log::info!("Starting germany-places service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the persistence handle (lazy; no connection is opened yet)
    let db = config::init_db_handle(&config).context("invalid database configuration")?;

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let db_data = web::Data::new(db.clone());
    let config_data = web::Data::new(config.clone());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            // Application state (persistence handle and config)
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            // Middleware
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::config)
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await?;

    // 6. Release database connections
    db.close().await;
    log::info!("Server stopped");

    Ok(())
}
