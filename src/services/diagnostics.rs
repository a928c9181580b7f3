// src/services/diagnostics.rs
// DOCUMENTATION: Connectivity diagnostics behind GET /test
// PURPOSE: Report backend and database status without ever failing

use crate::config::Config;
use crate::db::DbHandle;
use crate::models::{
    set_marker, DiagnosticReport, BACKEND_RUNNING, DATABASE_NOT_AVAILABLE,
    DATABASE_NOT_INITIALIZED, DATABASE_WORKING,
};

/// Maximum number of collection names in a report
const MAX_COLLECTIONS: i64 = 10;

/// Maximum number of error characters echoed back
const MAX_ERROR_CHARS: usize = 50;

pub struct DiagnosticService;

impl DiagnosticService {
    /// Build a status report
    /// DOCUMENTATION: Storage failures are rendered into the `database` field
    pub async fn report(db: &DbHandle, config: &Config) -> DiagnosticReport {
        let mut report = DiagnosticReport {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: set_marker(config.database_url.is_some()),
            database_name: set_marker(config.database_name.is_some()),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        let Some(store) = db.get() else {
            return report;
        };

        if !store.is_open() {
            report.database = DATABASE_NOT_INITIALIZED.to_string();
            return report;
        }

        report.connection_status = "Connected".to_string();

        match store.list_collections(MAX_COLLECTIONS).await {
            Ok(collections) => {
                report.collections = collections;
                report.database = DATABASE_WORKING.to_string();
            }
            Err(e) => {
                log::warn!("Diagnostics could not list collections in {}: {}", store.name(), e);
                report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
            }
        }

        report
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, MemoryDocumentStore};
    use serde_json::json;
    use std::sync::Arc;

    fn config(url: Option<&str>, name: Option<&str>) -> Config {
        Config {
            database_url: url.map(str::to_string),
            database_name: name.map(str::to_string),
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            db_max_connections: 5,
            db_connection_timeout: 5,
        }
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short"), "short");
        assert_eq!(truncate(&"x".repeat(80)).len(), 50);
        assert_eq!(truncate(&"ü".repeat(60)).chars().count(), 50);
    }

    #[tokio::test]
    async fn test_without_database() {
        let report = DiagnosticService::report(&DbHandle::unconfigured(), &config(None, None)).await;

        assert_eq!(report.backend, BACKEND_RUNNING);
        assert_eq!(report.database, DATABASE_NOT_AVAILABLE);
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_working_database_lists_collections() {
        let store = Arc::new(MemoryDocumentStore::new());
        store.insert_one("place", json!({"name": "Zugspitze"})).await.unwrap();

        let db = DbHandle::new(store);
        let report = DiagnosticService::report(&db, &config(Some("postgres://h/db"), None)).await;

        assert_eq!(report.database, DATABASE_WORKING);
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections, vec!["place".to_string()]);
    }

    #[tokio::test]
    async fn test_storage_error_is_reported_truncated() {
        let message = "connection to server at 10.0.0.1:5432 refused, is the server running and accepting";
        let db = DbHandle::new(Arc::new(MemoryDocumentStore::failing(message)));

        let report = DiagnosticService::report(&db, &config(Some("postgres://h/db"), Some("db"))).await;

        let detail = report
            .database
            .strip_prefix("⚠️  Connected but Error: ")
            .expect("degraded status");
        assert_eq!(detail.chars().count(), 50);
        assert!(detail.starts_with("Database error: connection"));
        assert_eq!(report.connection_status, "Connected");
    }

    #[tokio::test]
    async fn test_closed_handle_is_not_initialized() {
        let db = DbHandle::new(Arc::new(MemoryDocumentStore::new()));
        db.close().await;

        let report = DiagnosticService::report(&db, &config(Some("postgres://h/db"), None)).await;
        assert_eq!(report.database, DATABASE_NOT_INITIALIZED);
    }
}
