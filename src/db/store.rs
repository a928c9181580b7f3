// src/db/store.rs
// DOCUMENTATION: Document store abstraction and the shared persistence handle
// PURPOSE: Decouple handlers and services from the concrete storage engine

use crate::db::Filter;
use crate::errors::PlacesError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A stored document together with its storage-assigned identifier
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
}

/// Document accessors used by the services
/// DOCUMENTATION: Implementations must be safe for concurrent use; there is
/// no locking above this layer.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database, reported by diagnostics
    fn name(&self) -> &str;

    /// Whether the store can still serve requests (false after close)
    fn is_open(&self) -> bool;

    /// Insert one document and return its generated identifier
    async fn insert_one(&self, collection: &str, doc: Value) -> Result<String, PlacesError>;

    /// Insert all documents or none; identifiers are returned in input order
    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Value>,
    ) -> Result<Vec<String>, PlacesError>;

    async fn count(&self, collection: &str) -> Result<i64, PlacesError>;

    /// Documents matching `filter`, in insertion order, at most `limit`
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, PlacesError>;

    /// Names of collections holding at least one document, at most `limit`
    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, PlacesError>;

    async fn close(&self);
}

/// Process-wide persistence handle
/// DOCUMENTATION: Built once at startup and shared read-only through
/// web::Data. Empty when no database is configured.
#[derive(Clone, Default)]
pub struct DbHandle {
    store: Option<Arc<dyn DocumentStore>>,
}

impl DbHandle {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    /// The configured store, or DatabaseNotConfigured
    pub fn store(&self) -> Result<&dyn DocumentStore, PlacesError> {
        self.store.as_deref().ok_or(PlacesError::DatabaseNotConfigured)
    }

    pub fn get(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }

    pub async fn close(&self) {
        if let Some(store) = &self.store {
            store.close().await;
            log::info!("Database handle closed");
        }
    }
}
