// src/db/memory.rs
// DOCUMENTATION: In-memory document store for tests
// PURPOSE: Exercise services and handlers without a running PostgreSQL

use crate::db::{DocumentStore, Filter, StoredDocument};
use crate::errors::PlacesError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Barrier, RwLock};
use uuid::Uuid;

struct Entry {
    collection: String,
    document: StoredDocument,
}

/// Vec-backed store; insertion order is the natural order
#[derive(Default)]
pub struct MemoryDocumentStore {
    entries: RwLock<Vec<Entry>>,
    failure: Option<String>,
    insert_barrier: Option<Barrier>,
    closed: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// A store whose inserts wait until `parties` inserts are pending,
    /// so concurrent callers interleave deterministically
    pub fn with_insert_barrier(parties: usize) -> Self {
        Self {
            insert_barrier: Some(Barrier::new(parties)),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), PlacesError> {
        match &self.failure {
            Some(message) => Err(PlacesError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn is_open(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
    }

    async fn insert_one(&self, collection: &str, doc: Value) -> Result<String, PlacesError> {
        let mut ids = self.insert_many(collection, vec![doc]).await?;
        Ok(ids.remove(0))
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Value>,
    ) -> Result<Vec<String>, PlacesError> {
        self.check()?;
        if let Some(barrier) = &self.insert_barrier {
            barrier.wait().await;
        }
        let mut entries = self.entries.write().await;

        let ids: Vec<String> = docs
            .into_iter()
            .map(|body| {
                let id = Uuid::new_v4().to_string();
                entries.push(Entry {
                    collection: collection.to_string(),
                    document: StoredDocument { id: id.clone(), body },
                });
                id
            })
            .collect();

        Ok(ids)
    }

    async fn count(&self, collection: &str) -> Result<i64, PlacesError> {
        self.check()?;
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.collection == collection).count() as i64)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, PlacesError> {
        self.check()?;
        let entries = self.entries.read().await;

        Ok(entries
            .iter()
            .filter(|e| e.collection == collection && filter.matches(&e.document.body))
            .take(limit.max(0) as usize)
            .map(|e| e.document.clone())
            .collect())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, PlacesError> {
        self.check()?;
        let entries = self.entries.read().await;

        let mut names: Vec<String> = entries.iter().map(|e| e.collection.clone()).collect();
        names.sort();
        names.dedup();
        names.truncate(limit.max(0) as usize);
        Ok(names)
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
