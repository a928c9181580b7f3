// src/models/diagnostics.rs
// DOCUMENTATION: Diagnostic report returned by GET /test

use serde::Serialize;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";

/// Connectivity report
/// DOCUMENTATION: database_url / database_name only say whether the
/// variables are set, never their values
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}
