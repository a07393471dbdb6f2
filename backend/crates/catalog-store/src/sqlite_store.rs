use crate::{Document, DocumentStore, Filter, Query, StoreError, StoreResult, WriteBatch};

use catalog_core::Fields;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use serde_json::Value;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
    SqliteSynchronous,
};
use sqlx::{QueryBuilder, Row, Sqlite};

const BUSY_TIMEOUT_SECS: u64 = 5;

/// Document store persisted in a single SQLite table of JSON documents.
///
/// Filters compile to `json_extract`/`json_each` predicates. Booleans are
/// stored by SQLite as `0`/`1`, so `true` and `1` compare equal here even
/// though they differ in [`crate::MemoryStore`].
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap an existing pool and bring its schema up to date.
    pub async fn new(pool: SqlitePool) -> StoreResult<Self> {
        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Open (creating if needed) the database file at `path`.
    pub async fn connect(path: &Path, max_connections: u32) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Connected to document store at {}", path.display());
        Self::new(pool).await
    }

    /// Private in-memory database, mostly for tests.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // A second connection would open a different, empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::new(pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| StoreError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let row = sqlx::query("SELECT id, data FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| decode_row(collection, r)).transpose()
    }

    async fn query(&self, query: &Query) -> StoreResult<Vec<Document>> {
        query.validate()?;

        let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, data FROM documents");
        push_filters(&mut builder, query);
        builder.push(" ORDER BY id");
        if let Some(limit) = query.limit {
            builder
                .push(" LIMIT ")
                .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|r| decode_row(&query.collection, r))
            .collect()
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        query.validate()?;

        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM documents");
        push_filters(&mut builder, query);

        let count: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn set(&self, collection: &str, document: Document) -> StoreResult<()> {
        let data = serde_json::to_string(&document.fields)?;

        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, data) VALUES (?, ?, ?)
                ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data
            "#,
        )
        .bind(collection)
        .bind(&document.id)
        .bind(data)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        for update in batch.updates() {
            let patch = serde_json::to_string(&update.fields)?;

            let result = sqlx::query(
                "UPDATE documents SET data = json_patch(data, ?) WHERE collection = ? AND id = ?",
            )
            .bind(patch)
            .bind(&update.collection)
            .bind(&update.id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Err(StoreError::document_not_found(&update.collection, &update.id));
            }
        }

        tx.commit().await?;
        debug!("Committed batch of {} updates", batch.len());
        Ok(())
    }
}

fn decode_row(collection: &str, row: SqliteRow) -> StoreResult<Document> {
    let id: String = row.try_get("id")?;
    let data: String = row.try_get("data")?;

    let fields: Fields =
        serde_json::from_str(&data).map_err(|source| StoreError::MalformedDocument {
            collection: collection.to_string(),
            id: id.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Document::new(id, fields))
}

/// Field names were checked by `Query::validate`, so embedding them in the
/// JSON path literal is safe and lets SQLite use expression indexes.
fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, query: &Query) {
    builder
        .push(" WHERE collection = ")
        .push_bind(query.collection.clone());

    for filter in &query.filters {
        let path = format!("'$.{}'", filter.field());
        builder.push(" AND ");

        match filter {
            Filter::Equals { value, .. } => {
                builder.push(format!("json_extract(data, {path}) IS "));
                push_value(builder, value);
            }
            Filter::NotEquals { value, .. } => {
                builder.push(format!("json_extract(data, {path}) IS NOT "));
                push_value(builder, value);
            }
            Filter::ArrayContains { value, .. } => {
                builder.push(format!(
                    "json_type(data, {path}) = 'array' AND EXISTS \
                     (SELECT 1 FROM json_each(data, {path}) WHERE json_each.value IS "
                ));
                push_value(builder, value);
                builder.push(")");
            }
            Filter::In { values, .. } => {
                builder.push(format!("json_extract(data, {path}) IN ("));
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        builder.push(", ");
                    }
                    push_value(builder, value);
                }
                builder.push(")");
            }
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: &Value) {
    match value {
        Value::Null => builder.push_bind(None::<String>),
        Value::Bool(flag) => builder.push_bind(i64::from(*flag)),
        Value::Number(number) => match number.as_i64() {
            Some(int) => builder.push_bind(int),
            None => builder.push_bind(number.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(text) => builder.push_bind(text.clone()),
        Value::Array(_) | Value::Object(_) => builder.push_bind(value.to_string()),
    };
}
