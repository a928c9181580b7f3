// src/db/postgres.rs
// DOCUMENTATION: PostgreSQL-backed document store
// PURPOSE: Persist JSON documents in a JSONB table and compile filters to SQL

use crate::db::{DocumentStore, FieldRef, Filter, Predicate, StoredDocument};
use crate::db::filter::like_pattern;
use crate::errors::PlacesError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tokio::sync::OnceCell;
use uuid::Uuid;

const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        seq BIGINT GENERATED ALWAYS AS IDENTITY,
        id UUID PRIMARY KEY,
        collection TEXT NOT NULL,
        body JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_seq_idx ON documents (collection, seq)";

/// Internal struct for mapping document rows
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Value,
}

impl DocumentRow {
    fn into_document(self) -> StoredDocument {
        StoredDocument {
            id: self.id.to_string(),
            body: self.body,
        }
    }
}

/// Document store on a sqlx PostgreSQL pool
/// DOCUMENTATION: The documents table is created on first use, once per process
pub struct PgDocumentStore {
    pool: PgPool,
    database_name: String,
    schema: OnceCell<()>,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, database_name: String) -> Self {
        Self {
            pool,
            database_name,
            schema: OnceCell::new(),
        }
    }

    /// Pool with the documents table guaranteed to exist
    async fn ready(&self) -> Result<&PgPool, PlacesError> {
        self.schema
            .get_or_try_init(|| async {
                sqlx::query(CREATE_DOCUMENTS_TABLE).execute(&self.pool).await?;
                sqlx::query(CREATE_COLLECTION_INDEX).execute(&self.pool).await?;
                log::info!("Documents table ready in database {}", self.database_name);
                Ok::<(), sqlx::Error>(())
            })
            .await
            .map_err(|e| {
                log::error!("Failed to prepare documents table: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        Ok(&self.pool)
    }
}

/// Build the SELECT for a filtered listing
/// DOCUMENTATION: Every user-supplied value, field names included, is bound
/// as a parameter; nothing from the filter is spliced into the SQL text.
/// Only JSON strings take part in a comparison, as in `Filter::matches`.
/// `lower()` and `ILIKE` fold case by the database's collation: with a UTF-8
/// or ICU collation this agrees with `str::to_lowercase`, under the C locale
/// only ASCII letters are folded (so `?city=MÜNCHEN` will not find "München").
pub fn find_query(collection: &str, filter: &Filter, limit: i64) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT id, body FROM documents WHERE collection = ");
    builder.push_bind(collection.to_string());

    for predicate in filter.predicates() {
        builder.push(" AND ");
        push_predicate(&mut builder, predicate);
    }

    builder.push(" ORDER BY seq LIMIT ");
    builder.push_bind(limit);
    builder
}

fn push_predicate(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::Exact { field, value } => {
            builder
                .push("(jsonb_typeof(body -> ")
                .push_bind(*field)
                .push(") = 'string' AND lower(body ->> ")
                .push_bind(*field)
                .push(") = lower(")
                .push_bind(value.clone())
                .push("))");
        }
        Predicate::Contains { fields, needle } => {
            if fields.is_empty() {
                builder.push("FALSE");
                return;
            }

            let pattern = like_pattern(needle);
            builder.push("(");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    builder.push(" OR ");
                }
                match field {
                    FieldRef::Scalar(name) => {
                        builder
                            .push("(jsonb_typeof(body -> ")
                            .push_bind(*name)
                            .push(") = 'string' AND (body ->> ")
                            .push_bind(*name)
                            .push(") ILIKE ")
                            .push_bind(pattern.clone())
                            .push(r" ESCAPE '\')");
                    }
                    FieldRef::Elements(name) => {
                        // Non-array values are treated as having no elements
                        builder
                            .push("EXISTS (SELECT 1 FROM jsonb_array_elements(CASE WHEN jsonb_typeof(body -> ")
                            .push_bind(*name)
                            .push(") = 'array' THEN body -> ")
                            .push_bind(*name)
                            .push(" ELSE '[]'::jsonb END) AS element(value) \
                                   WHERE jsonb_typeof(element.value) = 'string' \
                                   AND (element.value #>> '{}') ILIKE ")
                            .push_bind(pattern.clone())
                            .push(r" ESCAPE '\')");
                    }
                }
            }
            builder.push(")");
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &str {
        &self.database_name
    }

    fn is_open(&self) -> bool {
        !self.pool.is_closed()
    }

    async fn insert_one(&self, collection: &str, doc: Value) -> Result<String, PlacesError> {
        let pool = self.ready().await?;
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(&doc)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to insert document into {}: {}", collection, e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        Ok(id.to_string())
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Value>,
    ) -> Result<Vec<String>, PlacesError> {
        let pool = self.ready().await?;
        let db_error = |e: sqlx::Error| {
            log::error!("Batch insert into {} failed: {}", collection, e);
            PlacesError::DatabaseError(e.to_string())
        };

        let mut tx = pool.begin().await.map_err(db_error)?;
        let mut ids = Vec::with_capacity(docs.len());

        for doc in &docs {
            let id = Uuid::new_v4();
            sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
                .bind(id)
                .bind(collection)
                .bind(doc)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
            ids.push(id.to_string());
        }

        tx.commit().await.map_err(db_error)?;
        Ok(ids)
    }

    async fn count(&self, collection: &str) -> Result<i64, PlacesError> {
        let pool = self.ready().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Count query error: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        Ok(count)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, PlacesError> {
        let pool = self.ready().await?;
        let mut builder = find_query(collection, filter, limit);

        log::debug!("Executing find query: {}", builder.sql());

        let rows = builder
            .build_query_as::<DocumentRow>()
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Find query error: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(DocumentRow::into_document).collect())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, PlacesError> {
        let db_error = |e: sqlx::Error| PlacesError::DatabaseError(e.to_string());

        // Read-only: a missing table means no collections yet
        let exists: bool = sqlx::query_scalar("SELECT to_regclass('documents') IS NOT NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        if !exists {
            return Ok(Vec::new());
        }

        sqlx::query_scalar(
            "SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
