use async_trait::async_trait;
use snip_core::error::{Result, StoreError};
use snip_core::{Alias, RecordId, UrlDeleter, UrlGetter, UrlSaver};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::Row;
use std::path::PathBuf;
use std::time::Duration;
use typed_builder::TypedBuilder;

const SCHEMA: &str = include_str!("../ddl/sqlite/url.sql");

/// Connection settings for [`SqliteStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SqliteSettings {
    /// Path of the database file. Created if missing.
    #[builder(setter(into))]
    pub path: PathBuf,
    #[builder(default = 8)]
    pub max_connections: u32,
    /// How long a connection waits on a locked database before failing.
    #[builder(default = Duration::from_secs(5))]
    pub busy_timeout: Duration,
}

/// SQLite implementation of the store contract.
///
/// Alias uniqueness is carried by the `UNIQUE` constraint on `url.alias`, and
/// every operation is a single statement, so there is no read-then-write
/// window. The database runs in WAL mode with `synchronous = FULL`: a save
/// that returned `Ok` survives a crash.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store from an existing pool. The schema must already exist;
    /// see [`SqliteStore::migrate`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (or creates) the database file and applies the schema.
    pub async fn open(settings: SqliteSettings) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&settings.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(settings.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Opens the database at `path` with default settings.
    pub async fn connect(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(SqliteSettings::builder().path(path).build()).await
    }

    /// Creates the `url` table and its index if they do not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("timed out waiting for a connection: {message}"))
        }
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_) => {
            StoreError::Unavailable(format!("stored data is invalid: {message}"))
        }
        _ => StoreError::Unavailable(message),
    }
}

#[async_trait]
impl UrlSaver for SqliteStore {
    async fn save_url(&self, target_url: &str, alias: &Alias) -> Result<RecordId> {
        let result = sqlx::query(
            r#"
            INSERT INTO url (url, alias)
            VALUES (?, ?)
            "#,
        )
        .bind(target_url)
        .bind(alias.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(RecordId::new(done.last_insert_rowid())),
            Err(err) if is_unique_violation(&err) => {
                Err(StoreError::AlreadyExists(alias.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}

#[async_trait]
impl UrlGetter for SqliteStore {
    async fn get_url(&self, alias: &Alias) -> Result<String> {
        let row = sqlx::query(
            r#"
            SELECT url
            FROM url
            WHERE alias = ?
            "#,
        )
        .bind(alias.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Err(StoreError::NotFound(alias.to_string()));
        };

        row.try_get::<String, _>("url").map_err(map_sqlx_error)
    }
}

#[async_trait]
impl UrlDeleter for SqliteStore {
    async fn delete_url(&self, alias: &Alias) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM url
            WHERE alias = ?
            "#,
        )
        .bind(alias.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(alias.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_maps_to_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(err.is_unavailable());
    }

    #[test]
    fn decode_errors_map_to_unavailable() {
        let err = map_sqlx_error(sqlx::Error::ColumnNotFound("url".to_string()));
        assert!(matches!(err, StoreError::Unavailable(ref m) if m.contains("invalid")));
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn settings_defaults() {
        let settings = SqliteSettings::builder().path("/tmp/snip.db").build();
        assert_eq!(settings.max_connections, 8);
        assert_eq!(settings.busy_timeout, Duration::from_secs(5));
    }
}
