// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and register every route

pub mod diagnostics;
pub mod places;
pub mod root;

use crate::errors::PlacesError;
use actix_web::web;

pub use diagnostics::config as diagnostics_config;
pub use places::config as places_config;
pub use root::config as root_config;

/// Register all routes plus extractor settings
/// DOCUMENTATION: Malformed query strings and JSON bodies are reported as
/// validation errors (422) in the same error shape as every other failure
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        PlacesError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        PlacesError::ValidationError(err.to_string()).into()
    }))
    .configure(root_config)
    .configure(places_config)
    .configure(diagnostics_config);
}
